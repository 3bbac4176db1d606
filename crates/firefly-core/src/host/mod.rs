//! Host capability traits: one trait per import module, one method per import.
//!
//! Arguments are already flattened to the scalar shapes that cross the
//! boundary. Pointer+length pairs are expressed as slices; the WASM
//! implementation splits them into a linear-memory offset and a length.
//! Nothing here knows about `Point`, `Style` and friends: that translation
//! lives in the wrappers on [`crate::Firefly`].

pub mod recording;

use std::sync::Arc;

/// Imports from the `graphics` module.
#[allow(clippy::too_many_arguments)]
pub trait Graphics {
    fn clear_screen(&self, color: i32);
    fn set_color(&self, color: i32, r: i32, g: i32, b: i32);
    fn draw_point(&self, x: i32, y: i32, color: i32);
    fn draw_line(&self, x1: i32, y1: i32, x2: i32, y2: i32, color: i32, stroke_width: i32);
    fn draw_rect(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32);
    fn draw_rounded_rect(
        &self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        cw: i32,
        ch: i32,
        fc: i32,
        sc: i32,
        sw: i32,
    );
    fn draw_circle(&self, x: i32, y: i32, d: i32, fc: i32, sc: i32, sw: i32);
    fn draw_ellipse(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32);
    fn draw_triangle(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        fc: i32,
        sc: i32,
        sw: i32,
    );
    fn draw_arc(
        &self,
        x: i32,
        y: i32,
        d: i32,
        start: f32,
        sweep: f32,
        fc: i32,
        sc: i32,
        sw: i32,
    );
    fn draw_sector(
        &self,
        x: i32,
        y: i32,
        d: i32,
        start: f32,
        sweep: f32,
        fc: i32,
        sc: i32,
        sw: i32,
    );
    fn draw_text(&self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32);
    fn draw_image(&self, image: &[u8], x: i32, y: i32);
    fn draw_sub_image(
        &self,
        image: &[u8],
        x: i32,
        y: i32,
        sub_x: i32,
        sub_y: i32,
        sub_width: i32,
        sub_height: i32,
    );
    /// The host keeps drawing into `canvas` until [`Graphics::unset_canvas`].
    fn set_canvas(&self, canvas: &mut [u8]);
    fn unset_canvas(&self);
}

/// Imports from the `input` module.
pub trait Input {
    fn read_pad(&self, peer: i32) -> i32;
    fn read_buttons(&self, peer: i32) -> i32;
}

/// Imports from the `fs` module.
pub trait Fs {
    fn get_file_size(&self, path: &str) -> i32;
    /// Returns the size the host reports for the file, which may exceed `buf`.
    fn load_file(&self, path: &str, buf: &mut [u8]) -> u32;
    fn dump_file(&self, path: &str, data: &[u8]) -> u32;
    fn remove_file(&self, path: &str);
}

/// Imports from the `misc` module: peers, stats, logging, randomness, lifecycle.
pub trait Misc {
    fn get_me(&self) -> i32;
    fn get_peers(&self) -> i32;
    fn add_progress(&self, peer: u32, badge: u32, delta: i32) -> u32;
    fn add_score(&self, peer: u32, board: u32, delta: i32) -> i32;
    fn log_debug(&self, msg: &str);
    fn log_error(&self, msg: &str);
    fn set_seed(&self, seed: u32);
    fn get_random(&self) -> u32;
    fn get_name(&self, buf: &mut [u8]) -> u32;
    fn restart(&self);
    fn quit(&self);
}

/// Imports from the `audio` module. Node ids are opaque to the guest.
pub trait Audio {
    fn add_sine(&self, parent: u32, freq: f32, phase: f32) -> u32;
    fn add_square(&self, parent: u32, freq: f32, phase: f32) -> u32;
    fn add_sawtooth(&self, parent: u32, freq: f32, phase: f32) -> u32;
    fn add_triangle(&self, parent: u32, freq: f32, phase: f32) -> u32;
    fn add_noise(&self, parent: u32, seed: i32) -> u32;
    fn add_empty(&self, parent: u32) -> u32;
    fn add_zero(&self, parent: u32) -> u32;
    fn add_file(&self, parent: u32, path: &str) -> u32;
    fn add_mix(&self, parent: u32) -> u32;
    fn add_all_for_one(&self, parent: u32) -> u32;
    fn add_gain(&self, parent: u32, lvl: f32) -> u32;
    fn add_loop(&self, parent: u32) -> u32;
    fn add_concat(&self, parent: u32) -> u32;
    fn add_pan(&self, parent: u32, lvl: f32) -> u32;
    fn add_mute(&self, parent: u32) -> u32;
    fn add_pause(&self, parent: u32) -> u32;
    fn add_track_position(&self, parent: u32) -> u32;
    fn add_low_pass(&self, parent: u32, freq: f32, q: f32) -> u32;
    fn add_high_pass(&self, parent: u32, freq: f32, q: f32) -> u32;
    fn add_take_left(&self, parent: u32) -> u32;
    fn add_take_right(&self, parent: u32) -> u32;
    fn add_swap(&self, parent: u32) -> u32;
    fn add_clip(&self, parent: u32, low: f32, high: f32) -> u32;
    fn mod_linear(&self, node: u32, param: u32, start: f32, end: f32, start_at: u32, end_at: u32);
    fn mod_hold(&self, node: u32, param: u32, before: f32, after: f32, time: u32);
    fn mod_sine(&self, node: u32, param: u32, freq: f32, low: f32, high: f32);
    fn reset(&self, node: u32);
    fn reset_all(&self, node: u32);
    fn clear(&self, node: u32);
}

/// The full host surface.
pub trait Host: Graphics + Input + Fs + Misc + Audio {}

impl<T: Graphics + Input + Fs + Misc + Audio> Host for T {}

impl<T: Misc + ?Sized> Misc for Arc<T> {
    fn get_me(&self) -> i32 {
        (**self).get_me()
    }
    fn get_peers(&self) -> i32 {
        (**self).get_peers()
    }
    fn add_progress(&self, peer: u32, badge: u32, delta: i32) -> u32 {
        (**self).add_progress(peer, badge, delta)
    }
    fn add_score(&self, peer: u32, board: u32, delta: i32) -> i32 {
        (**self).add_score(peer, board, delta)
    }
    fn log_debug(&self, msg: &str) {
        (**self).log_debug(msg)
    }
    fn log_error(&self, msg: &str) {
        (**self).log_error(msg)
    }
    fn set_seed(&self, seed: u32) {
        (**self).set_seed(seed)
    }
    fn get_random(&self) -> u32 {
        (**self).get_random()
    }
    fn get_name(&self, buf: &mut [u8]) -> u32 {
        (**self).get_name(buf)
    }
    fn restart(&self) {
        (**self).restart()
    }
    fn quit(&self) {
        (**self).quit()
    }
}
