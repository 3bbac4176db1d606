//! Shapes, palette colors, and the drawing wrappers.
//!
//! Every draw call forwards its arguments in a fixed order: position, then
//! dimensions, then the style triple (fill color, stroke color, stroke
//! width). The host relies on that order, so the wrappers never reorder.

mod canvas;

pub use canvas::{Canvas, CanvasGuard};

use serde::{Deserialize, Serialize};

use crate::buffer::{Buffer, Image, SubImage};
use crate::host::Graphics;
use crate::Firefly;

/// Screen width in pixels.
pub const WIDTH: i32 = 240;
/// Screen height in pixels.
pub const HEIGHT: i32 = 160;

/// A point on the screen, typically the upper-left corner of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Size of a bounding box. Width and height should be positive; the host
/// decides what happens otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An angle between two vectors, stored in radians.
///
/// Only constructible through [`Angle::radians`] / [`Angle::degrees`] so a
/// bare float can never be mistaken for the wrong unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    /// A full turn.
    pub const FULL_CIRCLE: Angle = Angle(core::f32::consts::TAU);

    /// An angle in radians, where τ (2π) is the full circle.
    pub const fn radians(a: f32) -> Self {
        Self(a)
    }

    /// An angle in degrees, where 360.0 is the full circle.
    pub fn degrees(a: f32) -> Self {
        Self(a * core::f32::consts::PI / 180.0)
    }

    pub const fn to_radians(self) -> f32 {
        self.0
    }

    pub fn to_degrees(self) -> f32 {
        self.0 * 180.0 / core::f32::consts::PI
    }
}

/// Shorthand for [`Angle::radians`].
pub const fn radians(a: f32) -> Angle {
    Angle::radians(a)
}

/// Shorthand for [`Angle::degrees`].
pub fn degrees(a: f32) -> Angle {
    Angle::degrees(a)
}

/// An index into the host's 17-entry color palette.
///
/// What each entry looks like can be changed at runtime with
/// [`Firefly::set_color`]; the index itself never changes meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Color {
    #[default]
    None = 0,
    Black = 1,
    Purple = 2,
    Red = 3,
    Orange = 4,
    Yellow = 5,
    LightGreen = 6,
    Green = 7,
    DarkGreen = 8,
    DarkBlue = 9,
    Blue = 10,
    LightBlue = 11,
    Cyan = 12,
    White = 13,
    LightGray = 14,
    Gray = 15,
    DarkGray = 16,
}

impl Color {
    pub const ALL: [Color; 17] = [
        Color::None,
        Color::Black,
        Color::Purple,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::LightGreen,
        Color::Green,
        Color::DarkGreen,
        Color::DarkBlue,
        Color::Blue,
        Color::LightBlue,
        Color::Cyan,
        Color::White,
        Color::LightGray,
        Color::Gray,
        Color::DarkGray,
    ];

    pub const fn raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Color {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Color::ALL.get(i).copied())
            .ok_or(value)
    }
}

/// Explicit channel values for one palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn raw(self) -> (i32, i32, i32) {
        (
            i32::from(self.r as i8),
            i32::from(self.g as i8),
            i32::from(self.b as i8),
        )
    }
}

/// Fill and stroke of a closed shape. A zero stroke width means a solid
/// fill with no outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: i32,
}

impl Style {
    pub const fn solid(color: Color) -> Self {
        Self {
            fill_color: color,
            stroke_color: Color::None,
            stroke_width: 0,
        }
    }

    pub const fn outlined(color: Color, width: i32) -> Self {
        Self {
            fill_color: Color::None,
            stroke_color: color,
            stroke_width: width,
        }
    }

    /// The stroke part alone, for open shapes.
    pub const fn line_style(self) -> LineStyle {
        LineStyle {
            color: self.stroke_color,
            width: self.stroke_width,
        }
    }

    fn raw(self) -> (i32, i32, i32) {
        (
            self.fill_color.raw(),
            self.stroke_color.raw(),
            self.stroke_width,
        )
    }
}

/// Like [`Style`] but without a fill: stroke color and width only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: i32,
}

impl LineStyle {
    pub const fn new(color: Color, width: i32) -> Self {
        Self { color, width }
    }
}

impl<H: Graphics> Firefly<H> {
    /// Fill the whole frame with the given color.
    pub fn clear_screen(&self, c: Color) {
        self.host().clear_screen(c.raw());
    }

    /// Redefine what a palette slot renders as.
    ///
    /// Channels cross the boundary sign-extended from a byte, the same bits
    /// the C SDK's `int8_t` fields produce, so 255 arrives as -1.
    pub fn set_color(&self, c: Color, v: Rgb) {
        let (r, g, b) = v.raw();
        self.host().set_color(c.raw(), r, g, b);
    }

    /// Set a single point on the frame.
    pub fn draw_point(&self, p: Point, c: Color) {
        self.host().draw_point(p.x, p.y, c.raw());
    }

    /// Draw a straight line from `a` to `b`.
    pub fn draw_line(&self, a: Point, b: Point, s: LineStyle) {
        self.host()
            .draw_line(a.x, a.y, b.x, b.y, s.color.raw(), s.width);
    }

    /// Draw a rectangle filling the given bounding box.
    pub fn draw_rect(&self, p: Point, b: Size, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host().draw_rect(p.x, p.y, b.width, b.height, fc, sc, sw);
    }

    /// Draw a rectangle with rounded corners; `corner` is the size of the
    /// ellipse used for each corner.
    pub fn draw_rounded_rect(&self, p: Point, b: Size, corner: Size, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host().draw_rounded_rect(
            p.x,
            p.y,
            b.width,
            b.height,
            corner.width,
            corner.height,
            fc,
            sc,
            sw,
        );
    }

    /// Draw a circle with the given diameter.
    pub fn draw_circle(&self, p: Point, d: i32, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host().draw_circle(p.x, p.y, d, fc, sc, sw);
    }

    pub fn draw_ellipse(&self, p: Point, b: Size, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host().draw_ellipse(p.x, p.y, b.width, b.height, fc, sc, sw);
    }

    pub fn draw_triangle(&self, a: Point, b: Point, c: Point, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host()
            .draw_triangle(a.x, a.y, b.x, b.y, c.x, c.y, fc, sc, sw);
    }

    /// Draw an arc of the circle with diameter `d`.
    pub fn draw_arc(&self, p: Point, d: i32, start: Angle, sweep: Angle, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host()
            .draw_arc(p.x, p.y, d, start.to_radians(), sweep.to_radians(), fc, sc, sw);
    }

    /// Draw a sector (pie slice) of the circle with diameter `d`.
    pub fn draw_sector(&self, p: Point, d: i32, start: Angle, sweep: Angle, s: Style) {
        let (fc, sc, sw) = s.raw();
        self.host()
            .draw_sector(p.x, p.y, d, start.to_radians(), sweep.to_radians(), fc, sc, sw);
    }

    /// Render text with a font file previously loaded into memory.
    pub fn draw_text(&self, text: &str, font: Buffer<'_>, p: Point, c: Color) {
        self.host()
            .draw_text(text.as_bytes(), font.as_bytes(), p.x, p.y, c.raw());
    }

    pub fn draw_image(&self, img: Image<'_>, p: Point) {
        self.host().draw_image(img.as_bytes(), p.x, p.y);
    }

    /// Draw the window of `s.image` described by `s.point` and `s.size`.
    pub fn draw_sub_image(&self, s: SubImage<'_>, p: Point) {
        self.host().draw_sub_image(
            s.image.as_bytes(),
            p.x,
            p.y,
            s.point.x,
            s.point.y,
            s.size.width,
            s.size.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{Arg, RecordingHost};

    fn sdk() -> Firefly<RecordingHost> {
        Firefly::new(RecordingHost::new())
    }

    #[test]
    fn test_degrees_matches_radians() {
        for a in [0.0f32, 45.0, 90.0, 180.0, -30.0, 720.0] {
            let d = degrees(a).to_radians();
            let r = radians(a * core::f32::consts::PI / 180.0).to_radians();
            assert!((d - r).abs() < 1e-6, "{a}: {d} != {r}");
        }
        let full = degrees(360.0).to_radians();
        assert!((full - Angle::FULL_CIRCLE.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_angle_round_trips_degrees() {
        assert!((Angle::degrees(90.0).to_degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_color_try_from() {
        assert_eq!(Color::try_from(0), Ok(Color::None));
        assert_eq!(Color::try_from(16), Ok(Color::DarkGray));
        assert_eq!(Color::try_from(17), Err(17));
        assert_eq!(Color::try_from(-1), Err(-1));
        for (i, c) in Color::ALL.iter().enumerate() {
            assert_eq!(c.raw(), i as i32);
        }
    }

    #[test]
    fn test_draw_rect_argument_order() {
        let ff = sdk();
        let style = Style {
            fill_color: Color::Red,
            stroke_color: Color::Black,
            stroke_width: 2,
        };
        ff.draw_rect(Point::new(10, 20), Size::new(30, 40), style);
        let call = ff.host().last_call().unwrap();
        assert_eq!((call.module, call.name), ("graphics", "draw_rect"));
        assert_eq!(call.ints(), vec![10, 20, 30, 40, 3, 1, 2]);
    }

    #[test]
    fn test_draw_rounded_rect_argument_order() {
        let ff = sdk();
        let style = Style {
            fill_color: Color::Blue,
            stroke_color: Color::White,
            stroke_width: 1,
        };
        ff.draw_rounded_rect(Point::new(1, 2), Size::new(3, 4), Size::new(5, 6), style);
        let call = ff.host().last_call().unwrap();
        assert_eq!(call.ints(), vec![1, 2, 3, 4, 5, 6, 10, 13, 1]);
    }

    #[test]
    fn test_draw_line_and_point_argument_order() {
        let ff = sdk();
        ff.draw_line(
            Point::new(10, 10),
            Point::new(20, 30),
            LineStyle::new(Color::Black, 1),
        );
        ff.draw_point(Point::new(7, 8), Color::Cyan);
        let calls = ff.host().calls();
        assert_eq!(calls[0].ints(), vec![10, 10, 20, 30, 1, 1]);
        assert_eq!(calls[1].ints(), vec![7, 8, 12]);
    }

    #[test]
    fn test_draw_circle_ellipse_triangle_argument_order() {
        let ff = sdk();
        let style = Style {
            fill_color: Color::LightGray,
            stroke_color: Color::DarkBlue,
            stroke_width: 1,
        };
        ff.draw_circle(Point::new(5, 6), 20, style);
        ff.draw_ellipse(Point::new(5, 6), Size::new(20, 10), style);
        ff.draw_triangle(
            Point::new(60, 10),
            Point::new(40, 40),
            Point::new(80, 40),
            style,
        );
        let calls = ff.host().calls();
        assert_eq!(calls[0].ints(), vec![5, 6, 20, 14, 9, 1]);
        assert_eq!(calls[1].ints(), vec![5, 6, 20, 10, 14, 9, 1]);
        assert_eq!(calls[2].ints(), vec![60, 10, 40, 40, 80, 40, 14, 9, 1]);
    }

    #[test]
    fn test_draw_arc_passes_radians_after_diameter() {
        let ff = sdk();
        ff.draw_arc(
            Point::new(1, 2),
            30,
            Angle::radians(0.5),
            Angle::radians(1.5),
            Style::solid(Color::Green),
        );
        ff.draw_sector(
            Point::new(1, 2),
            30,
            Angle::radians(0.25),
            Angle::radians(1.0),
            Style::outlined(Color::Red, 3),
        );
        let calls = ff.host().calls();
        assert_eq!(
            calls[0].args,
            vec![
                Arg::I32(1),
                Arg::I32(2),
                Arg::I32(30),
                Arg::F32(0.5),
                Arg::F32(1.5),
                Arg::I32(7),
                Arg::I32(0),
                Arg::I32(0),
            ]
        );
        assert_eq!(calls[1].name, "draw_sector");
        assert_eq!(calls[1].ints(), vec![1, 2, 30, 0, 3, 3]);
    }

    #[test]
    fn test_set_color_and_clear_screen() {
        let ff = sdk();
        ff.set_color(Color::Purple, Rgb::new(255, 0, 128));
        ff.clear_screen(Color::White);
        let calls = ff.host().calls();
        assert_eq!(calls[0].ints(), vec![2, -1, 0, -128]);
        assert_eq!(calls[1].ints(), vec![13]);
    }

    #[test]
    fn test_set_color_channels_keep_low_byte() {
        let ff = sdk();
        ff.set_color(Color::Red, Rgb::new(127, 200, 1));
        let args = ff.host().last_call().unwrap().ints();
        assert_eq!(args, vec![3, 127, -56, 1]);
        let low: Vec<u8> = args[1..].iter().map(|v| *v as u8).collect();
        assert_eq!(low, vec![127, 200, 1]);
    }

    #[test]
    fn test_draw_image_passes_borrowed_bytes() {
        let ff = sdk();
        let bytes = [1u8, 2, 3, 4];
        ff.draw_image(Buffer::new(&bytes), Point::new(10, 10));
        let sub = SubImage {
            image: Buffer::new(&bytes),
            point: Point::new(1, 1),
            size: Size::new(2, 2),
        };
        ff.draw_sub_image(sub, Point::new(3, 4));
        let calls = ff.host().calls();
        assert_eq!(calls[0].args[0], Arg::Bytes(bytes.to_vec()));
        assert_eq!(calls[0].ints(), vec![10, 10]);
        assert_eq!(calls[1].ints(), vec![3, 4, 1, 1, 2, 2]);
    }

    #[test]
    fn test_draw_text() {
        let ff = sdk();
        let font = [9u8; 3];
        ff.draw_text("hi", Buffer::new(&font), Point::new(0, 8), Color::Black);
        let call = ff.host().last_call().unwrap();
        assert_eq!(call.args[0], Arg::Bytes(b"hi".to_vec()));
        assert_eq!(call.args[1], Arg::Bytes(font.to_vec()));
        assert_eq!(call.ints(), vec![0, 8, 1]);
    }

    #[test]
    fn test_style_helpers() {
        let s = Style::outlined(Color::Orange, 2);
        assert_eq!(s.line_style(), LineStyle::new(Color::Orange, 2));
        assert_eq!(Style::solid(Color::Gray).stroke_width, 0);
    }
}
