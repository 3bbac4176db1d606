//! Draws a single outlined triangle on a white screen.

use firefly_wasm::{sdk, Color, Point, Style};

fn boot() {
    let ff = sdk();
    ff.clear_screen(Color::White);
    ff.draw_triangle(
        Point::new(60, 10),
        Point::new(40, 40),
        Point::new(80, 40),
        Style {
            fill_color: Color::LightGray,
            stroke_color: Color::DarkBlue,
            stroke_width: 1,
        },
    );
}

firefly_wasm::boot!(boot);
