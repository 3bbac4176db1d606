//! Typed facade over the host's audio graph.
//!
//! Every `add_*` call attaches one node under `parent` and returns its
//! handle. The graph lives entirely in the host: the SDK never stores,
//! walks, or validates its topology.

mod modulator;
mod time;

pub use modulator::{HoldModulator, LinearModulator, ModParam, NodeKind, SineModulator};
pub use time::{milliseconds, samples, seconds, AudioTime, SAMPLE_RATE};

use crate::host::Audio;
use crate::Firefly;

/// Opaque handle to a node in the host's audio graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioNode(u32);

impl AudioNode {
    /// The output node every graph starts from.
    pub const ROOT: AudioNode = AudioNode(0);

    /// Wrap an id previously handed out by the host.
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl<H: Audio> Firefly<H> {
    // -- generators --

    pub fn add_sine(&self, parent: AudioNode, freq: f32, phase: f32) -> AudioNode {
        AudioNode(self.host().add_sine(parent.0, freq, phase))
    }

    pub fn add_square(&self, parent: AudioNode, freq: f32, phase: f32) -> AudioNode {
        AudioNode(self.host().add_square(parent.0, freq, phase))
    }

    pub fn add_sawtooth(&self, parent: AudioNode, freq: f32, phase: f32) -> AudioNode {
        AudioNode(self.host().add_sawtooth(parent.0, freq, phase))
    }

    pub fn add_triangle(&self, parent: AudioNode, freq: f32, phase: f32) -> AudioNode {
        AudioNode(self.host().add_triangle(parent.0, freq, phase))
    }

    /// White noise from the given seed.
    pub fn add_noise(&self, parent: AudioNode, seed: i32) -> AudioNode {
        AudioNode(self.host().add_noise(parent.0, seed))
    }

    /// A source that ends immediately.
    pub fn add_empty(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_empty(parent.0))
    }

    /// Silence that never ends.
    pub fn add_zero(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_zero(parent.0))
    }

    /// Play an audio file bundled with the app.
    pub fn add_file(&self, parent: AudioNode, path: &str) -> AudioNode {
        AudioNode(self.host().add_file(parent.0, path))
    }

    // -- processing nodes --

    /// Mix all children together.
    pub fn add_mix(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_mix(parent.0))
    }

    /// Like mix, but stops as soon as any child stops.
    pub fn add_all_for_one(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_all_for_one(parent.0))
    }

    pub fn add_gain(&self, parent: AudioNode, lvl: f32) -> AudioNode {
        AudioNode(self.host().add_gain(parent.0, lvl))
    }

    /// Restart the child when it ends.
    pub fn add_loop(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_loop(parent.0))
    }

    /// Play children one after another.
    pub fn add_concat(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_concat(parent.0))
    }

    /// Stereo pan: 0.0 is only left, 1.0 is only right.
    pub fn add_pan(&self, parent: AudioNode, lvl: f32) -> AudioNode {
        AudioNode(self.host().add_pan(parent.0, lvl))
    }

    pub fn add_mute(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_mute(parent.0))
    }

    pub fn add_pause(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_pause(parent.0))
    }

    pub fn add_track_position(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_track_position(parent.0))
    }

    pub fn add_low_pass(&self, parent: AudioNode, freq: f32, q: f32) -> AudioNode {
        AudioNode(self.host().add_low_pass(parent.0, freq, q))
    }

    pub fn add_high_pass(&self, parent: AudioNode, freq: f32, q: f32) -> AudioNode {
        AudioNode(self.host().add_high_pass(parent.0, freq, q))
    }

    pub fn add_take_left(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_take_left(parent.0))
    }

    pub fn add_take_right(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_take_right(parent.0))
    }

    /// Swap left and right channels.
    pub fn add_swap(&self, parent: AudioNode) -> AudioNode {
        AudioNode(self.host().add_swap(parent.0))
    }

    /// Clamp amplitude to `low..=high`.
    pub fn add_clip(&self, parent: AudioNode, low: f32, high: f32) -> AudioNode {
        AudioNode(self.host().add_clip(parent.0, low, high))
    }

    // -- modulation --

    pub fn mod_linear(&self, node: AudioNode, param: ModParam, m: LinearModulator) {
        self.host().mod_linear(
            node.0,
            param.raw(),
            m.start,
            m.end,
            m.start_at.samples(),
            m.end_at.samples(),
        );
    }

    pub fn mod_hold(&self, node: AudioNode, param: ModParam, m: HoldModulator) {
        self.host()
            .mod_hold(node.0, param.raw(), m.before, m.after, m.time.samples());
    }

    pub fn mod_sine(&self, node: AudioNode, param: ModParam, m: SineModulator) {
        self.host()
            .mod_sine(node.0, param.raw(), m.freq, m.low, m.high);
    }

    // -- lifecycle --

    /// Reset the node to its initial state.
    pub fn audio_reset(&self, node: AudioNode) {
        self.host().reset(node.0);
    }

    /// Reset the node and all of its descendants.
    pub fn audio_reset_all(&self, node: AudioNode) {
        self.host().reset_all(node.0);
    }

    /// Remove all children of the node.
    pub fn audio_clear(&self, node: AudioNode) {
        self.host().clear(node.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{Arg, RecordingHost};

    #[test]
    fn test_add_nodes_chain_parent_ids() {
        let ff = Firefly::new(RecordingHost::new());
        let mix = ff.add_mix(AudioNode::ROOT);
        let gain = ff.add_gain(mix, 0.5);
        let sine = ff.add_sine(gain, 440.0, 0.0);
        let calls = ff.host().calls();
        assert_eq!(calls[0].args, vec![Arg::U32(0)]);
        assert_eq!(calls[1].args, vec![Arg::U32(mix.raw()), Arg::F32(0.5)]);
        assert_eq!(
            calls[2].args,
            vec![Arg::U32(gain.raw()), Arg::F32(440.0), Arg::F32(0.0)]
        );
        assert_ne!(sine, gain);
    }

    #[test]
    fn test_node_ids_come_from_host() {
        let host = RecordingHost::new().with_return("add_file", 99);
        let ff = Firefly::new(host);
        let node = ff.add_file(AudioNode::ROOT, "music");
        assert_eq!(node, AudioNode::from_raw(99));
        assert_eq!(
            ff.host().last_call().unwrap().args,
            vec![Arg::U32(0), Arg::Str("music".into())]
        );
    }

    #[test]
    fn test_mod_linear_forwards_sample_times() {
        let ff = Firefly::new(RecordingHost::new());
        let gain = ff.add_gain(AudioNode::ROOT, 1.0);
        ff.mod_linear(
            gain,
            ModParam::Gain,
            LinearModulator {
                start: 0.0,
                end: 1.0,
                start_at: AudioTime::seconds(1),
                end_at: AudioTime::seconds(2),
            },
        );
        assert_eq!(
            ff.host().last_call().unwrap().args,
            vec![
                Arg::U32(gain.raw()),
                Arg::U32(0),
                Arg::F32(0.0),
                Arg::F32(1.0),
                Arg::U32(44_100),
                Arg::U32(88_200),
            ]
        );
    }

    #[test]
    fn test_mod_hold_and_sine_on_clip() {
        let ff = Firefly::new(RecordingHost::new());
        let clip = ff.add_clip(AudioNode::ROOT, -0.5, 0.5);
        ff.mod_hold(
            clip,
            ModParam::ClipHigh,
            HoldModulator {
                before: 0.5,
                after: 0.25,
                time: AudioTime::milliseconds(500),
            },
        );
        ff.mod_sine(
            clip,
            ModParam::ClipLow,
            SineModulator {
                freq: 2.0,
                low: -1.0,
                high: 0.0,
            },
        );
        let hold = &ff.host().calls_to("mod_hold")[0];
        assert_eq!(hold.args[1], Arg::U32(2));
        assert_eq!(hold.args[4], Arg::U32(22_050));
        let sine = &ff.host().calls_to("mod_sine")[0];
        assert_eq!(sine.args[1], Arg::U32(1));
    }

    #[test]
    fn test_reset_and_clear() {
        let ff = Firefly::new(RecordingHost::new());
        let node = AudioNode::from_raw(5);
        ff.audio_reset(node);
        ff.audio_reset_all(node);
        ff.audio_clear(node);
        let names: Vec<_> = ff.host().calls().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["reset", "reset_all", "clear"]);
        assert!(ff
            .host()
            .calls()
            .iter()
            .all(|c| c.args == vec![Arg::U32(5)]));
    }
}
