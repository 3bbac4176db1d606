//! Host imports: functions the Firefly runtime provides to the guest module.
//!
//! On wasm32 targets `WasmHost` calls the real `extern "C"` imports. On
//! native targets (for testing) every import is a stub: actions do nothing
//! and getters return neutral values.

use firefly_core::host::{Audio, Fs, Graphics, Input, Misc};

/// The runtime itself, seen through its import modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WasmHost;

#[cfg(target_arch = "wasm32")]
mod ffi {
    pub mod graphics {
        #[link(wasm_import_module = "graphics")]
        unsafe extern "C" {
            pub fn clear_screen(c: i32);
            pub fn set_color(c: i32, r: i32, g: i32, b: i32);
            pub fn draw_point(x: i32, y: i32, c: i32);
            pub fn draw_line(x1: i32, y1: i32, x2: i32, y2: i32, color: i32, stroke_width: i32);
            pub fn draw_rect(x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32);
            pub fn draw_rounded_rect(
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
            pub fn draw_circle(x: i32, y: i32, d: i32, fc: i32, sc: i32, sw: i32);
            pub fn draw_ellipse(x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32);
            pub fn draw_triangle(
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
            pub fn draw_arc(
                x: i32,
                y: i32,
                d: i32,
                start: f32,
                sweep: f32,
                fc: i32,
                sc: i32,
                sw: i32,
            );
            pub fn draw_sector(
                x: i32,
                y: i32,
                d: i32,
                start: f32,
                sweep: f32,
                fc: i32,
                sc: i32,
                sw: i32,
            );
            pub fn draw_text(
                text_ptr: *const u8,
                text_len: u32,
                font_ptr: *const u8,
                font_len: u32,
                x: i32,
                y: i32,
                color: i32,
            );
            pub fn draw_image(ptr: *const u8, len: u32, x: i32, y: i32);
            pub fn draw_sub_image(
                ptr: *const u8,
                len: u32,
                x: i32,
                y: i32,
                sub_x: i32,
                sub_y: i32,
                sub_width: i32,
                sub_height: i32,
            );
            pub fn set_canvas(ptr: *mut u8, len: u32);
            pub fn unset_canvas();
        }
    }

    pub mod input {
        #[link(wasm_import_module = "input")]
        unsafe extern "C" {
            pub fn read_pad(peer: i32) -> i32;
            pub fn read_buttons(peer: i32) -> i32;
        }
    }

    pub mod fs {
        #[link(wasm_import_module = "fs")]
        unsafe extern "C" {
            pub fn get_file_size(path_ptr: *const u8, path_len: u32) -> i32;
            pub fn load_file(path_ptr: *const u8, path_len: u32, buf_ptr: *mut u8, buf_len: u32) -> u32;
            pub fn dump_file(path_ptr: *const u8, path_len: u32, buf_ptr: *const u8, buf_len: u32) -> u32;
            pub fn remove_file(path_ptr: *const u8, path_len: u32);
        }
    }

    pub mod misc {
        #[link(wasm_import_module = "misc")]
        unsafe extern "C" {
            pub fn get_me() -> i32;
            pub fn get_peers() -> i32;
            pub fn add_progress(peer: u32, badge: u32, delta: i32) -> u32;
            pub fn add_score(peer: u32, board: u32, delta: i32) -> i32;
            pub fn log_debug(ptr: *const u8, len: u32);
            pub fn log_error(ptr: *const u8, len: u32);
            pub fn set_seed(seed: u32);
            pub fn get_random() -> u32;
            pub fn get_name(ptr: *mut u8, len: u32) -> u32;
            pub fn restart();
            pub fn quit();
        }
    }

    pub mod audio {
        #[link(wasm_import_module = "audio")]
        unsafe extern "C" {
            pub fn add_sine(parent: u32, freq: f32, phase: f32) -> u32;
            pub fn add_square(parent: u32, freq: f32, phase: f32) -> u32;
            pub fn add_sawtooth(parent: u32, freq: f32, phase: f32) -> u32;
            pub fn add_triangle(parent: u32, freq: f32, phase: f32) -> u32;
            pub fn add_noise(parent: u32, seed: i32) -> u32;
            pub fn add_empty(parent: u32) -> u32;
            pub fn add_zero(parent: u32) -> u32;
            pub fn add_file(parent: u32, ptr: *const u8, len: u32) -> u32;
            pub fn add_mix(parent: u32) -> u32;
            pub fn add_all_for_one(parent: u32) -> u32;
            pub fn add_gain(parent: u32, lvl: f32) -> u32;
            pub fn add_loop(parent: u32) -> u32;
            pub fn add_concat(parent: u32) -> u32;
            pub fn add_pan(parent: u32, lvl: f32) -> u32;
            pub fn add_mute(parent: u32) -> u32;
            pub fn add_pause(parent: u32) -> u32;
            pub fn add_track_position(parent: u32) -> u32;
            pub fn add_low_pass(parent: u32, freq: f32, q: f32) -> u32;
            pub fn add_high_pass(parent: u32, freq: f32, q: f32) -> u32;
            pub fn add_take_left(parent: u32) -> u32;
            pub fn add_take_right(parent: u32) -> u32;
            pub fn add_swap(parent: u32) -> u32;
            pub fn add_clip(parent: u32, low: f32, high: f32) -> u32;
            pub fn mod_linear(node: u32, param: u32, start: f32, end: f32, start_at: u32, end_at: u32);
            pub fn mod_hold(node: u32, param: u32, before: f32, after: f32, time: u32);
            pub fn mod_sine(node: u32, param: u32, freq: f32, low: f32, high: f32);
            pub fn reset(node: u32);
            pub fn reset_all(node: u32);
            pub fn clear(node: u32);
        }
    }
}

// -- wasm32: real imports --

#[cfg(target_arch = "wasm32")]
impl Graphics for WasmHost {
    fn clear_screen(&self, color: i32) {
        unsafe { ffi::graphics::clear_screen(color) }
    }

    fn set_color(&self, color: i32, r: i32, g: i32, b: i32) {
        unsafe { ffi::graphics::set_color(color, r, g, b) }
    }

    fn draw_point(&self, x: i32, y: i32, color: i32) {
        unsafe { ffi::graphics::draw_point(x, y, color) }
    }

    fn draw_line(&self, x1: i32, y1: i32, x2: i32, y2: i32, color: i32, stroke_width: i32) {
        unsafe { ffi::graphics::draw_line(x1, y1, x2, y2, color, stroke_width) }
    }

    fn draw_rect(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32) {
        unsafe { ffi::graphics::draw_rect(x, y, w, h, fc, sc, sw) }
    }

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
    ) {
        unsafe { ffi::graphics::draw_rounded_rect(x, y, w, h, cw, ch, fc, sc, sw) }
    }

    fn draw_circle(&self, x: i32, y: i32, d: i32, fc: i32, sc: i32, sw: i32) {
        unsafe { ffi::graphics::draw_circle(x, y, d, fc, sc, sw) }
    }

    fn draw_ellipse(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32) {
        unsafe { ffi::graphics::draw_ellipse(x, y, w, h, fc, sc, sw) }
    }

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
    ) {
        unsafe { ffi::graphics::draw_triangle(x1, y1, x2, y2, x3, y3, fc, sc, sw) }
    }

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
    ) {
        unsafe { ffi::graphics::draw_arc(x, y, d, start, sweep, fc, sc, sw) }
    }

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
    ) {
        unsafe { ffi::graphics::draw_sector(x, y, d, start, sweep, fc, sc, sw) }
    }

    fn draw_text(&self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
        unsafe {
            ffi::graphics::draw_text(
                text.as_ptr(),
                text.len() as u32,
                font.as_ptr(),
                font.len() as u32,
                x,
                y,
                color,
            )
        }
    }

    fn draw_image(&self, image: &[u8], x: i32, y: i32) {
        unsafe { ffi::graphics::draw_image(image.as_ptr(), image.len() as u32, x, y) }
    }

    fn draw_sub_image(
        &self,
        image: &[u8],
        x: i32,
        y: i32,
        sub_x: i32,
        sub_y: i32,
        sub_width: i32,
        sub_height: i32,
    ) {
        unsafe {
            ffi::graphics::draw_sub_image(
                image.as_ptr(),
                image.len() as u32,
                x,
                y,
                sub_x,
                sub_y,
                sub_width,
                sub_height,
            )
        }
    }

    fn set_canvas(&self, canvas: &mut [u8]) {
        unsafe { ffi::graphics::set_canvas(canvas.as_mut_ptr(), canvas.len() as u32) }
    }

    fn unset_canvas(&self) {
        unsafe { ffi::graphics::unset_canvas() }
    }
}

#[cfg(target_arch = "wasm32")]
impl Input for WasmHost {
    fn read_pad(&self, peer: i32) -> i32 {
        unsafe { ffi::input::read_pad(peer) }
    }

    fn read_buttons(&self, peer: i32) -> i32 {
        unsafe { ffi::input::read_buttons(peer) }
    }
}

#[cfg(target_arch = "wasm32")]
impl Fs for WasmHost {
    fn get_file_size(&self, path: &str) -> i32 {
        unsafe { ffi::fs::get_file_size(path.as_ptr(), path.len() as u32) }
    }

    fn load_file(&self, path: &str, buf: &mut [u8]) -> u32 {
        unsafe {
            ffi::fs::load_file(
                path.as_ptr(),
                path.len() as u32,
                buf.as_mut_ptr(),
                buf.len() as u32,
            )
        }
    }

    fn dump_file(&self, path: &str, data: &[u8]) -> u32 {
        unsafe {
            ffi::fs::dump_file(
                path.as_ptr(),
                path.len() as u32,
                data.as_ptr(),
                data.len() as u32,
            )
        }
    }

    fn remove_file(&self, path: &str) {
        unsafe { ffi::fs::remove_file(path.as_ptr(), path.len() as u32) }
    }
}

#[cfg(target_arch = "wasm32")]
impl Misc for WasmHost {
    fn get_me(&self) -> i32 {
        unsafe { ffi::misc::get_me() }
    }

    fn get_peers(&self) -> i32 {
        unsafe { ffi::misc::get_peers() }
    }

    fn add_progress(&self, peer: u32, badge: u32, delta: i32) -> u32 {
        unsafe { ffi::misc::add_progress(peer, badge, delta) }
    }

    fn add_score(&self, peer: u32, board: u32, delta: i32) -> i32 {
        unsafe { ffi::misc::add_score(peer, board, delta) }
    }

    fn log_debug(&self, msg: &str) {
        unsafe { ffi::misc::log_debug(msg.as_ptr(), msg.len() as u32) }
    }

    fn log_error(&self, msg: &str) {
        unsafe { ffi::misc::log_error(msg.as_ptr(), msg.len() as u32) }
    }

    fn set_seed(&self, seed: u32) {
        unsafe { ffi::misc::set_seed(seed) }
    }

    fn get_random(&self) -> u32 {
        unsafe { ffi::misc::get_random() }
    }

    fn get_name(&self, buf: &mut [u8]) -> u32 {
        unsafe { ffi::misc::get_name(buf.as_mut_ptr(), buf.len() as u32) }
    }

    fn restart(&self) {
        unsafe { ffi::misc::restart() }
    }

    fn quit(&self) {
        unsafe { ffi::misc::quit() }
    }
}

#[cfg(target_arch = "wasm32")]
impl Audio for WasmHost {
    fn add_sine(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        unsafe { ffi::audio::add_sine(parent, freq, phase) }
    }

    fn add_square(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        unsafe { ffi::audio::add_square(parent, freq, phase) }
    }

    fn add_sawtooth(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        unsafe { ffi::audio::add_sawtooth(parent, freq, phase) }
    }

    fn add_triangle(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        unsafe { ffi::audio::add_triangle(parent, freq, phase) }
    }

    fn add_noise(&self, parent: u32, seed: i32) -> u32 {
        unsafe { ffi::audio::add_noise(parent, seed) }
    }

    fn add_empty(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_empty(parent) }
    }

    fn add_zero(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_zero(parent) }
    }

    fn add_file(&self, parent: u32, path: &str) -> u32 {
        unsafe { ffi::audio::add_file(parent, path.as_ptr(), path.len() as u32) }
    }

    fn add_mix(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_mix(parent) }
    }

    fn add_all_for_one(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_all_for_one(parent) }
    }

    fn add_gain(&self, parent: u32, lvl: f32) -> u32 {
        unsafe { ffi::audio::add_gain(parent, lvl) }
    }

    fn add_loop(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_loop(parent) }
    }

    fn add_concat(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_concat(parent) }
    }

    fn add_pan(&self, parent: u32, lvl: f32) -> u32 {
        unsafe { ffi::audio::add_pan(parent, lvl) }
    }

    fn add_mute(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_mute(parent) }
    }

    fn add_pause(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_pause(parent) }
    }

    fn add_track_position(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_track_position(parent) }
    }

    fn add_low_pass(&self, parent: u32, freq: f32, q: f32) -> u32 {
        unsafe { ffi::audio::add_low_pass(parent, freq, q) }
    }

    fn add_high_pass(&self, parent: u32, freq: f32, q: f32) -> u32 {
        unsafe { ffi::audio::add_high_pass(parent, freq, q) }
    }

    fn add_take_left(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_take_left(parent) }
    }

    fn add_take_right(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_take_right(parent) }
    }

    fn add_swap(&self, parent: u32) -> u32 {
        unsafe { ffi::audio::add_swap(parent) }
    }

    fn add_clip(&self, parent: u32, low: f32, high: f32) -> u32 {
        unsafe { ffi::audio::add_clip(parent, low, high) }
    }

    fn mod_linear(&self, node: u32, param: u32, start: f32, end: f32, start_at: u32, end_at: u32) {
        unsafe { ffi::audio::mod_linear(node, param, start, end, start_at, end_at) }
    }

    fn mod_hold(&self, node: u32, param: u32, before: f32, after: f32, time: u32) {
        unsafe { ffi::audio::mod_hold(node, param, before, after, time) }
    }

    fn mod_sine(&self, node: u32, param: u32, freq: f32, low: f32, high: f32) {
        unsafe { ffi::audio::mod_sine(node, param, freq, low, high) }
    }

    fn reset(&self, node: u32) {
        unsafe { ffi::audio::reset(node) }
    }

    fn reset_all(&self, node: u32) {
        unsafe { ffi::audio::reset_all(node) }
    }

    fn clear(&self, node: u32) {
        unsafe { ffi::audio::clear(node) }
    }
}

// -- native: stubs --

#[cfg(not(target_arch = "wasm32"))]
impl Graphics for WasmHost {
    fn clear_screen(&self, _color: i32) {}
    fn set_color(&self, _color: i32, _r: i32, _g: i32, _b: i32) {}
    fn draw_point(&self, _x: i32, _y: i32, _color: i32) {}
    fn draw_line(&self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _color: i32, _sw: i32) {}
    fn draw_rect(&self, _x: i32, _y: i32, _w: i32, _h: i32, _fc: i32, _sc: i32, _sw: i32) {}
    fn draw_rounded_rect(
        &self,
        _x: i32,
        _y: i32,
        _w: i32,
        _h: i32,
        _cw: i32,
        _ch: i32,
        _fc: i32,
        _sc: i32,
        _sw: i32,
    ) {
    }
    fn draw_circle(&self, _x: i32, _y: i32, _d: i32, _fc: i32, _sc: i32, _sw: i32) {}
    fn draw_ellipse(&self, _x: i32, _y: i32, _w: i32, _h: i32, _fc: i32, _sc: i32, _sw: i32) {}
    fn draw_triangle(
        &self,
        _x1: i32,
        _y1: i32,
        _x2: i32,
        _y2: i32,
        _x3: i32,
        _y3: i32,
        _fc: i32,
        _sc: i32,
        _sw: i32,
    ) {
    }
    fn draw_arc(
        &self,
        _x: i32,
        _y: i32,
        _d: i32,
        _start: f32,
        _sweep: f32,
        _fc: i32,
        _sc: i32,
        _sw: i32,
    ) {
    }
    fn draw_sector(
        &self,
        _x: i32,
        _y: i32,
        _d: i32,
        _start: f32,
        _sweep: f32,
        _fc: i32,
        _sc: i32,
        _sw: i32,
    ) {
    }
    fn draw_text(&self, _text: &[u8], _font: &[u8], _x: i32, _y: i32, _color: i32) {}
    fn draw_image(&self, _image: &[u8], _x: i32, _y: i32) {}
    fn draw_sub_image(
        &self,
        _image: &[u8],
        _x: i32,
        _y: i32,
        _sub_x: i32,
        _sub_y: i32,
        _sub_width: i32,
        _sub_height: i32,
    ) {
    }
    fn set_canvas(&self, _canvas: &mut [u8]) {}
    fn unset_canvas(&self) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl Input for WasmHost {
    fn read_pad(&self, _peer: i32) -> i32 {
        firefly_core::input::PAD_UNTOUCHED
    }

    fn read_buttons(&self, _peer: i32) -> i32 {
        0
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Fs for WasmHost {
    fn get_file_size(&self, _path: &str) -> i32 {
        0
    }

    fn load_file(&self, _path: &str, _buf: &mut [u8]) -> u32 {
        0
    }

    fn dump_file(&self, _path: &str, data: &[u8]) -> u32 {
        data.len() as u32
    }

    fn remove_file(&self, _path: &str) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl Misc for WasmHost {
    fn get_me(&self) -> i32 {
        0
    }

    fn get_peers(&self) -> i32 {
        1
    }

    fn add_progress(&self, _peer: u32, _badge: u32, _delta: i32) -> u32 {
        0
    }

    fn add_score(&self, _peer: u32, _board: u32, _delta: i32) -> i32 {
        0
    }

    fn log_debug(&self, _msg: &str) {}
    fn log_error(&self, _msg: &str) {}
    fn set_seed(&self, _seed: u32) {}

    fn get_random(&self) -> u32 {
        0
    }

    fn get_name(&self, _buf: &mut [u8]) -> u32 {
        0
    }

    fn restart(&self) {}
    fn quit(&self) {}
}

#[cfg(not(target_arch = "wasm32"))]
impl Audio for WasmHost {
    fn add_sine(&self, _parent: u32, _freq: f32, _phase: f32) -> u32 {
        0
    }
    fn add_square(&self, _parent: u32, _freq: f32, _phase: f32) -> u32 {
        0
    }
    fn add_sawtooth(&self, _parent: u32, _freq: f32, _phase: f32) -> u32 {
        0
    }
    fn add_triangle(&self, _parent: u32, _freq: f32, _phase: f32) -> u32 {
        0
    }
    fn add_noise(&self, _parent: u32, _seed: i32) -> u32 {
        0
    }
    fn add_empty(&self, _parent: u32) -> u32 {
        0
    }
    fn add_zero(&self, _parent: u32) -> u32 {
        0
    }
    fn add_file(&self, _parent: u32, _path: &str) -> u32 {
        0
    }
    fn add_mix(&self, _parent: u32) -> u32 {
        0
    }
    fn add_all_for_one(&self, _parent: u32) -> u32 {
        0
    }
    fn add_gain(&self, _parent: u32, _lvl: f32) -> u32 {
        0
    }
    fn add_loop(&self, _parent: u32) -> u32 {
        0
    }
    fn add_concat(&self, _parent: u32) -> u32 {
        0
    }
    fn add_pan(&self, _parent: u32, _lvl: f32) -> u32 {
        0
    }
    fn add_mute(&self, _parent: u32) -> u32 {
        0
    }
    fn add_pause(&self, _parent: u32) -> u32 {
        0
    }
    fn add_track_position(&self, _parent: u32) -> u32 {
        0
    }
    fn add_low_pass(&self, _parent: u32, _freq: f32, _q: f32) -> u32 {
        0
    }
    fn add_high_pass(&self, _parent: u32, _freq: f32, _q: f32) -> u32 {
        0
    }
    fn add_take_left(&self, _parent: u32) -> u32 {
        0
    }
    fn add_take_right(&self, _parent: u32) -> u32 {
        0
    }
    fn add_swap(&self, _parent: u32) -> u32 {
        0
    }
    fn add_clip(&self, _parent: u32, _low: f32, _high: f32) -> u32 {
        0
    }
    fn mod_linear(&self, _node: u32, _param: u32, _start: f32, _end: f32, _at: u32, _until: u32) {}
    fn mod_hold(&self, _node: u32, _param: u32, _before: f32, _after: f32, _time: u32) {}
    fn mod_sine(&self, _node: u32, _param: u32, _freq: f32, _low: f32, _high: f32) {}
    fn reset(&self, _node: u32) {}
    fn reset_all(&self, _node: u32) {}
    fn clear(&self, _node: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_getters_are_neutral() {
        let host = WasmHost;
        assert_eq!(host.read_pad(0), 0xFFFF);
        assert_eq!(host.read_buttons(0), 0);
        assert_eq!(host.get_file_size("missing"), 0);
        assert_eq!(host.get_me(), 0);
        assert_eq!(host.get_peers(), 1);
        assert_eq!(host.add_sine(0, 440.0, 0.0), 0);
    }

    #[test]
    fn test_stub_buffers_untouched() {
        let host = WasmHost;
        let mut buf = [7u8; 4];
        assert_eq!(host.load_file("x", &mut buf), 0);
        assert_eq!(host.get_name(&mut buf), 0);
        assert_eq!(buf, [7u8; 4]);
        assert_eq!(host.dump_file("x", b"abc"), 3);
    }
}
