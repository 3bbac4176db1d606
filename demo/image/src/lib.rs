//! Loads the `img` file once at boot and redraws it every frame.
//!
//! Reads `config.json` first so the log level can be tuned per build.

use std::sync::OnceLock;

use firefly_wasm::{init_logging, sdk, Color, Image, Point};

static IMAGE: OnceLock<Vec<u8>> = OnceLock::new();

fn boot() {
    let ff = sdk();
    let config = match ff.load_config("config.json") {
        Ok(config) => config,
        Err(err) => {
            ff.log_error(&format!("bad config, using defaults: {err}"));
            Default::default()
        }
    };
    if let Err(err) = init_logging(&config.log) {
        ff.log_error(&format!("{err:#}"));
    }

    let image = ff.load_file_buf("img");
    if image.is_empty() {
        tracing::error!("img is missing or empty");
    } else {
        tracing::info!(size = image.len(), "image loaded");
    }
    let _ = IMAGE.set(image);
}

fn update() {
    let ff = sdk();
    ff.clear_screen(Color::White);
    if let Some(image) = IMAGE.get().filter(|bytes| !bytes.is_empty()) {
        ff.draw_image(Image::new(image), Point::new(10, 10));
    }
}

firefly_wasm::boot!(boot);
firefly_wasm::update!(update);
