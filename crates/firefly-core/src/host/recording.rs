use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Audio, Fs, Graphics, Input, Misc};

/// One scalar argument as it crossed the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    I32(i32),
    U32(u32),
    F32(f32),
    /// A pointer+length pair, captured by value.
    Bytes(Vec<u8>),
    /// A pointer+length pair holding UTF-8 text (paths, log lines).
    Str(String),
}

/// A captured host import call.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCall {
    pub module: &'static str,
    pub name: &'static str,
    pub args: Vec<Arg>,
}

impl HostCall {
    pub fn new(module: &'static str, name: &'static str, args: Vec<Arg>) -> Self {
        Self { module, name, args }
    }

    /// Integer arguments only, in order. Handy for asserting draw calls.
    pub fn ints(&self) -> Vec<i32> {
        self.args
            .iter()
            .filter_map(|a| match a {
                Arg::I32(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

/// A fake host for testing. Records every call and returns pre-configured
/// raw results per import name, falling back to neutral defaults.
///
/// The `fs` imports behave like a writable data directory backed by an
/// in-memory file table. `load_file` reports the full stored size even when
/// the destination is smaller, the way a careless host would.
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    returns: Mutex<HashMap<&'static str, VecDeque<i64>>>,
    files: Mutex<HashMap<String, Vec<u8>>>,
    name: Vec<u8>,
    next_node: Mutex<u32>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            returns: Mutex::new(HashMap::new()),
            files: Mutex::new(HashMap::new()),
            name: Vec::new(),
            next_node: Mutex::new(1),
        }
    }

    /// Queue a raw result for the next call to the named import.
    pub fn with_return(self, import: &'static str, raw: impl Into<i64>) -> Self {
        lock(&self.returns)
            .entry(import)
            .or_default()
            .push_back(raw.into());
        self
    }

    pub fn with_file(self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        lock(&self.files).insert(path.into(), contents.into());
        self
    }

    /// The device name reported by `get_name`.
    pub fn with_name(mut self, name: impl Into<Vec<u8>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<HostCall> {
        lock(&self.calls).last().cloned()
    }

    /// Calls to one import, in order.
    pub fn calls_to(&self, name: &str) -> Vec<HostCall> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Current contents of a file in the fake data directory.
    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        lock(&self.files).get(path).cloned()
    }

    fn record(&self, module: &'static str, name: &'static str, args: Vec<Arg>) {
        lock(&self.calls).push(HostCall::new(module, name, args));
    }

    fn queued(&self, name: &'static str) -> Option<i64> {
        lock(&self.returns).get_mut(name).and_then(|q| q.pop_front())
    }

    fn queued_i32(&self, name: &'static str, default: i32) -> i32 {
        self.queued(name).map(|v| v as i32).unwrap_or(default)
    }

    fn queued_u32(&self, name: &'static str, default: u32) -> u32 {
        self.queued(name).map(|v| v as u32).unwrap_or(default)
    }

    fn new_node(&self, name: &'static str, args: Vec<Arg>) -> u32 {
        self.record("audio", name, args);
        if let Some(id) = self.queued(name) {
            return id as u32;
        }
        let mut next = lock(&self.next_node);
        let id = *next;
        *next += 1;
        id
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

fn colors(fc: i32, sc: i32, sw: i32) -> [Arg; 3] {
    [Arg::I32(fc), Arg::I32(sc), Arg::I32(sw)]
}

impl Graphics for RecordingHost {
    fn clear_screen(&self, color: i32) {
        self.record("graphics", "clear_screen", vec![Arg::I32(color)]);
    }

    fn set_color(&self, color: i32, r: i32, g: i32, b: i32) {
        let args = vec![Arg::I32(color), Arg::I32(r), Arg::I32(g), Arg::I32(b)];
        self.record("graphics", "set_color", args);
    }

    fn draw_point(&self, x: i32, y: i32, color: i32) {
        let args = vec![Arg::I32(x), Arg::I32(y), Arg::I32(color)];
        self.record("graphics", "draw_point", args);
    }

    fn draw_line(&self, x1: i32, y1: i32, x2: i32, y2: i32, color: i32, stroke_width: i32) {
        let args = [x1, y1, x2, y2, color, stroke_width].map(Arg::I32).to_vec();
        self.record("graphics", "draw_line", args);
    }

    fn draw_rect(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32) {
        let mut args = [x, y, w, h].map(Arg::I32).to_vec();
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_rect", args);
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
        let mut args = [x, y, w, h, cw, ch].map(Arg::I32).to_vec();
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_rounded_rect", args);
    }

    fn draw_circle(&self, x: i32, y: i32, d: i32, fc: i32, sc: i32, sw: i32) {
        let mut args = [x, y, d].map(Arg::I32).to_vec();
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_circle", args);
    }

    fn draw_ellipse(&self, x: i32, y: i32, w: i32, h: i32, fc: i32, sc: i32, sw: i32) {
        let mut args = [x, y, w, h].map(Arg::I32).to_vec();
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_ellipse", args);
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
        let mut args = [x1, y1, x2, y2, x3, y3].map(Arg::I32).to_vec();
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_triangle", args);
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
        let mut args = [x, y, d].map(Arg::I32).to_vec();
        args.extend([Arg::F32(start), Arg::F32(sweep)]);
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_arc", args);
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
        let mut args = [x, y, d].map(Arg::I32).to_vec();
        args.extend([Arg::F32(start), Arg::F32(sweep)]);
        args.extend(colors(fc, sc, sw));
        self.record("graphics", "draw_sector", args);
    }

    fn draw_text(&self, text: &[u8], font: &[u8], x: i32, y: i32, color: i32) {
        let args = vec![
            Arg::Bytes(text.to_vec()),
            Arg::Bytes(font.to_vec()),
            Arg::I32(x),
            Arg::I32(y),
            Arg::I32(color),
        ];
        self.record("graphics", "draw_text", args);
    }

    fn draw_image(&self, image: &[u8], x: i32, y: i32) {
        let args = vec![Arg::Bytes(image.to_vec()), Arg::I32(x), Arg::I32(y)];
        self.record("graphics", "draw_image", args);
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
        let mut args = vec![Arg::Bytes(image.to_vec())];
        args.extend([x, y, sub_x, sub_y, sub_width, sub_height].map(Arg::I32));
        self.record("graphics", "draw_sub_image", args);
    }

    fn set_canvas(&self, canvas: &mut [u8]) {
        self.record("graphics", "set_canvas", vec![Arg::U32(canvas.len() as u32)]);
    }

    fn unset_canvas(&self) {
        self.record("graphics", "unset_canvas", vec![]);
    }
}

impl Input for RecordingHost {
    fn read_pad(&self, peer: i32) -> i32 {
        self.record("input", "read_pad", vec![Arg::I32(peer)]);
        self.queued_i32("read_pad", 0xFFFF)
    }

    fn read_buttons(&self, peer: i32) -> i32 {
        self.record("input", "read_buttons", vec![Arg::I32(peer)]);
        self.queued_i32("read_buttons", 0)
    }
}

impl Fs for RecordingHost {
    fn get_file_size(&self, path: &str) -> i32 {
        self.record("fs", "get_file_size", vec![Arg::Str(path.to_string())]);
        let stored = lock(&self.files).get(path).map(|f| f.len() as i32);
        self.queued_i32("get_file_size", stored.unwrap_or(0))
    }

    fn load_file(&self, path: &str, buf: &mut [u8]) -> u32 {
        let args = vec![Arg::Str(path.to_string()), Arg::U32(buf.len() as u32)];
        self.record("fs", "load_file", args);
        let files = lock(&self.files);
        let Some(contents) = files.get(path) else {
            return self.queued_u32("load_file", 0);
        };
        let n = contents.len().min(buf.len());
        buf[..n].copy_from_slice(&contents[..n]);
        self.queued_u32("load_file", contents.len() as u32)
    }

    fn dump_file(&self, path: &str, data: &[u8]) -> u32 {
        let args = vec![Arg::Str(path.to_string()), Arg::Bytes(data.to_vec())];
        self.record("fs", "dump_file", args);
        lock(&self.files).insert(path.to_string(), data.to_vec());
        self.queued_u32("dump_file", data.len() as u32)
    }

    fn remove_file(&self, path: &str) {
        self.record("fs", "remove_file", vec![Arg::Str(path.to_string())]);
        lock(&self.files).remove(path);
    }
}

impl Misc for RecordingHost {
    fn get_me(&self) -> i32 {
        self.record("misc", "get_me", vec![]);
        self.queued_i32("get_me", 0)
    }

    fn get_peers(&self) -> i32 {
        self.record("misc", "get_peers", vec![]);
        self.queued_i32("get_peers", 0b1)
    }

    fn add_progress(&self, peer: u32, badge: u32, delta: i32) -> u32 {
        let args = vec![Arg::U32(peer), Arg::U32(badge), Arg::I32(delta)];
        self.record("misc", "add_progress", args);
        self.queued_u32("add_progress", 0)
    }

    fn add_score(&self, peer: u32, board: u32, delta: i32) -> i32 {
        let args = vec![Arg::U32(peer), Arg::U32(board), Arg::I32(delta)];
        self.record("misc", "add_score", args);
        self.queued_i32("add_score", 0)
    }

    fn log_debug(&self, msg: &str) {
        self.record("misc", "log_debug", vec![Arg::Str(msg.to_string())]);
    }

    fn log_error(&self, msg: &str) {
        self.record("misc", "log_error", vec![Arg::Str(msg.to_string())]);
    }

    fn set_seed(&self, seed: u32) {
        self.record("misc", "set_seed", vec![Arg::U32(seed)]);
    }

    fn get_random(&self) -> u32 {
        self.record("misc", "get_random", vec![]);
        self.queued_u32("get_random", 4)
    }

    fn get_name(&self, buf: &mut [u8]) -> u32 {
        self.record("misc", "get_name", vec![Arg::U32(buf.len() as u32)]);
        let n = self.name.len().min(buf.len());
        buf[..n].copy_from_slice(&self.name[..n]);
        self.queued_u32("get_name", self.name.len() as u32)
    }

    fn restart(&self) {
        self.record("misc", "restart", vec![]);
    }

    fn quit(&self) {
        self.record("misc", "quit", vec![]);
    }
}

impl Audio for RecordingHost {
    fn add_sine(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        self.new_node("add_sine", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(phase)])
    }

    fn add_square(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        self.new_node("add_square", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(phase)])
    }

    fn add_sawtooth(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        self.new_node("add_sawtooth", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(phase)])
    }

    fn add_triangle(&self, parent: u32, freq: f32, phase: f32) -> u32 {
        self.new_node("add_triangle", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(phase)])
    }

    fn add_noise(&self, parent: u32, seed: i32) -> u32 {
        self.new_node("add_noise", vec![Arg::U32(parent), Arg::I32(seed)])
    }

    fn add_empty(&self, parent: u32) -> u32 {
        self.new_node("add_empty", vec![Arg::U32(parent)])
    }

    fn add_zero(&self, parent: u32) -> u32 {
        self.new_node("add_zero", vec![Arg::U32(parent)])
    }

    fn add_file(&self, parent: u32, path: &str) -> u32 {
        self.new_node("add_file", vec![Arg::U32(parent), Arg::Str(path.to_string())])
    }

    fn add_mix(&self, parent: u32) -> u32 {
        self.new_node("add_mix", vec![Arg::U32(parent)])
    }

    fn add_all_for_one(&self, parent: u32) -> u32 {
        self.new_node("add_all_for_one", vec![Arg::U32(parent)])
    }

    fn add_gain(&self, parent: u32, lvl: f32) -> u32 {
        self.new_node("add_gain", vec![Arg::U32(parent), Arg::F32(lvl)])
    }

    fn add_loop(&self, parent: u32) -> u32 {
        self.new_node("add_loop", vec![Arg::U32(parent)])
    }

    fn add_concat(&self, parent: u32) -> u32 {
        self.new_node("add_concat", vec![Arg::U32(parent)])
    }

    fn add_pan(&self, parent: u32, lvl: f32) -> u32 {
        self.new_node("add_pan", vec![Arg::U32(parent), Arg::F32(lvl)])
    }

    fn add_mute(&self, parent: u32) -> u32 {
        self.new_node("add_mute", vec![Arg::U32(parent)])
    }

    fn add_pause(&self, parent: u32) -> u32 {
        self.new_node("add_pause", vec![Arg::U32(parent)])
    }

    fn add_track_position(&self, parent: u32) -> u32 {
        self.new_node("add_track_position", vec![Arg::U32(parent)])
    }

    fn add_low_pass(&self, parent: u32, freq: f32, q: f32) -> u32 {
        self.new_node("add_low_pass", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(q)])
    }

    fn add_high_pass(&self, parent: u32, freq: f32, q: f32) -> u32 {
        self.new_node("add_high_pass", vec![Arg::U32(parent), Arg::F32(freq), Arg::F32(q)])
    }

    fn add_take_left(&self, parent: u32) -> u32 {
        self.new_node("add_take_left", vec![Arg::U32(parent)])
    }

    fn add_take_right(&self, parent: u32) -> u32 {
        self.new_node("add_take_right", vec![Arg::U32(parent)])
    }

    fn add_swap(&self, parent: u32) -> u32 {
        self.new_node("add_swap", vec![Arg::U32(parent)])
    }

    fn add_clip(&self, parent: u32, low: f32, high: f32) -> u32 {
        self.new_node("add_clip", vec![Arg::U32(parent), Arg::F32(low), Arg::F32(high)])
    }

    fn mod_linear(&self, node: u32, param: u32, start: f32, end: f32, start_at: u32, end_at: u32) {
        let args = vec![
            Arg::U32(node),
            Arg::U32(param),
            Arg::F32(start),
            Arg::F32(end),
            Arg::U32(start_at),
            Arg::U32(end_at),
        ];
        self.record("audio", "mod_linear", args);
    }

    fn mod_hold(&self, node: u32, param: u32, before: f32, after: f32, time: u32) {
        let args = vec![
            Arg::U32(node),
            Arg::U32(param),
            Arg::F32(before),
            Arg::F32(after),
            Arg::U32(time),
        ];
        self.record("audio", "mod_hold", args);
    }

    fn mod_sine(&self, node: u32, param: u32, freq: f32, low: f32, high: f32) {
        let args = vec![
            Arg::U32(node),
            Arg::U32(param),
            Arg::F32(freq),
            Arg::F32(low),
            Arg::F32(high),
        ];
        self.record("audio", "mod_sine", args);
    }

    fn reset(&self, node: u32) {
        self.record("audio", "reset", vec![Arg::U32(node)]);
    }

    fn reset_all(&self, node: u32) {
        self.record("audio", "reset_all", vec![Arg::U32(node)]);
    }

    fn clear(&self, node: u32) {
        self.record("audio", "clear", vec![Arg::U32(node)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_returns_queued_values_in_order() {
        let host = RecordingHost::new()
            .with_return("read_buttons", 1)
            .with_return("read_buttons", 2);
        assert_eq!(host.read_buttons(0), 1);
        assert_eq!(host.read_buttons(0), 2);
        assert_eq!(host.read_buttons(0), 0);
        assert_eq!(host.calls_to("read_buttons").len(), 3);
    }

    #[test]
    fn test_recording_host_file_table() {
        let host = RecordingHost::new().with_file("save", b"abc".to_vec());
        assert_eq!(host.get_file_size("save"), 3);
        host.dump_file("other", b"xy");
        assert_eq!(host.file("other"), Some(b"xy".to_vec()));
        host.remove_file("save");
        assert_eq!(host.get_file_size("save"), 0);
    }

    #[test]
    fn test_recording_host_allocates_node_ids() {
        let host = RecordingHost::new();
        let a = host.add_mix(0);
        let b = host.add_sine(a, 440.0, 0.0);
        assert_eq!((a, b), (1, 2));
        let call = host.last_call().unwrap();
        assert_eq!(call.module, "audio");
        assert_eq!(call.args[0], Arg::U32(1));
    }
}
