use crate::buffer::Buffer;
use crate::host::Graphics;
use crate::Firefly;

/// Caller-owned memory the host can draw into instead of the screen.
///
/// The canvas must hold an image in the host's image format; the SDK never
/// inspects or resizes it.
#[derive(Debug)]
pub struct Canvas<'a> {
    bytes: &'a mut [u8],
}

impl<'a> Canvas<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// View the rendered canvas as an image, e.g. to draw it on screen.
    pub fn as_image(&self) -> Buffer<'_> {
        Buffer::new(&self.bytes[..])
    }
}

/// Redirects drawing into a [`Canvas`] for as long as it lives.
///
/// Dropping the guard (or calling [`CanvasGuard::finish`]) restores drawing
/// to the screen. Leaking the guard with `mem::forget` skips that and ends
/// the borrow, leaving the host drawing into memory the caller owns again.
/// [`Firefly::with_canvas`] has no such hole and is the one to reach for.
#[must_use = "dropping the guard immediately switches drawing back to the screen"]
pub struct CanvasGuard<'s, 'c, H: Graphics> {
    sdk: &'s Firefly<H>,
    canvas: Canvas<'c>,
}

impl<'c, H: Graphics> CanvasGuard<'_, 'c, H> {
    /// Switch back to the screen and hand the canvas back for reading.
    pub fn finish(mut self) -> Canvas<'c> {
        let bytes = core::mem::take(&mut self.canvas.bytes);
        drop(self);
        Canvas::new(bytes)
    }
}

impl<H: Graphics> Drop for CanvasGuard<'_, '_, H> {
    fn drop(&mut self) {
        self.sdk.unset_canvas();
    }
}

impl<H: Graphics> Firefly<H> {
    /// Draw into `canvas` instead of the screen until the guard is dropped.
    pub fn set_canvas<'c>(&self, mut canvas: Canvas<'c>) -> CanvasGuard<'_, 'c, H> {
        tracing::debug!(size = canvas.size(), "drawing into canvas");
        self.host().set_canvas(&mut canvas.bytes[..]);
        CanvasGuard { sdk: self, canvas }
    }

    /// Run `draw` with drawing redirected into `canvas`, then switch back to
    /// the screen and return the canvas.
    ///
    /// The redirect cannot outlive the call: the screen is restored when
    /// `draw` returns or unwinds, before the canvas memory is handed back.
    pub fn with_canvas<'c, F>(&self, canvas: Canvas<'c>, draw: F) -> Canvas<'c>
    where
        F: FnOnce(&Self),
    {
        let guard = self.set_canvas(canvas);
        draw(self);
        guard.finish()
    }

    /// Draw on the screen again.
    pub fn unset_canvas(&self) {
        tracing::debug!("drawing on screen");
        self.host().unset_canvas();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{Color, Point};
    use crate::host::recording::{Arg, RecordingHost};

    #[test]
    fn test_canvas_guard_unsets_on_drop() {
        let ff = Firefly::new(RecordingHost::new());
        let mut mem = [0u8; 16];
        {
            let _guard = ff.set_canvas(Canvas::new(&mut mem));
            ff.draw_point(Point::new(1, 1), Color::Red);
        }
        let names: Vec<_> = ff.host().calls().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["set_canvas", "draw_point", "unset_canvas"]);
        assert_eq!(ff.host().calls()[0].args, vec![Arg::U32(16)]);
    }

    #[test]
    fn test_canvas_guard_finish_unsets_once() {
        let ff = Firefly::new(RecordingHost::new());
        let mut mem = [7u8; 4];
        let guard = ff.set_canvas(Canvas::new(&mut mem));
        let canvas = guard.finish();
        assert_eq!(canvas.as_image().as_bytes(), &[7, 7, 7, 7]);
        assert_eq!(ff.host().calls_to("unset_canvas").len(), 1);
    }

    #[test]
    fn test_with_canvas_restores_screen_before_returning_memory() {
        let ff = Firefly::new(RecordingHost::new());
        let mut mem = [0u8; 8];
        let canvas = ff.with_canvas(Canvas::new(&mut mem), |ff| {
            ff.clear_screen(Color::Blue);
            ff.draw_point(Point::new(2, 3), Color::Red);
        });
        assert_eq!(canvas.size(), 8);
        let names: Vec<_> = ff.host().calls().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["set_canvas", "clear_screen", "draw_point", "unset_canvas"]
        );
        mem[0] = 1;
        assert_eq!(mem[0], 1);
    }

    #[test]
    fn test_with_canvas_restores_screen_on_panic() {
        let ff = Firefly::new(RecordingHost::new());
        let mut mem = [0u8; 4];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            ff.with_canvas(Canvas::new(&mut mem), |_| panic!("draw failed"));
        }));
        assert!(result.is_err());
        let last = ff.host().last_call().unwrap();
        assert_eq!(last.name, "unset_canvas");
    }
}
