use serde::{Deserialize, Serialize};

use super::AudioTime;

/// The kind of audio node a [`ModParam`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Gain,
    Pan,
    Mute,
    Pause,
    LowPass,
    HighPass,
    Clip,
}

/// A modulatable parameter, named by the node it belongs to.
///
/// The host identifies a parameter by a small ordinal whose meaning depends
/// on the node type, so most parameters share ordinal 0. Each parameter gets
/// its own variant here; the ordinal only appears at the boundary via
/// [`ModParam::raw`]. Applying a parameter to a node of another kind is not
/// detected by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModParam {
    /// Oscillation frequency of a sine node.
    Sine,
    /// Oscillation frequency of a square node.
    Square,
    /// Oscillation frequency of a sawtooth node.
    Sawtooth,
    /// Oscillation frequency of a triangle node.
    Triangle,
    /// Level of a gain node.
    Gain,
    /// Pan of a pan node, 0.0 (left) to 1.0 (right).
    Pan,
    /// Muted below 0.5, unmuted above.
    Mute,
    /// Paused below 0.5, playing above.
    Pause,
    /// Cut-off frequency of a low-pass node.
    LowPass,
    /// Cut-off frequency of a high-pass node.
    HighPass,
    /// Low cut of a clip node, moving the high cut to keep the gap.
    ClipBoth,
    /// Low cut of a clip node.
    ClipLow,
    /// High cut of a clip node.
    ClipHigh,
}

impl ModParam {
    /// The ordinal the host expects.
    pub const fn raw(self) -> u32 {
        match self {
            ModParam::ClipLow => 1,
            ModParam::ClipHigh => 2,
            _ => 0,
        }
    }

    pub const fn node_kind(self) -> NodeKind {
        match self {
            ModParam::Sine => NodeKind::Sine,
            ModParam::Square => NodeKind::Square,
            ModParam::Sawtooth => NodeKind::Sawtooth,
            ModParam::Triangle => NodeKind::Triangle,
            ModParam::Gain => NodeKind::Gain,
            ModParam::Pan => NodeKind::Pan,
            ModParam::Mute => NodeKind::Mute,
            ModParam::Pause => NodeKind::Pause,
            ModParam::LowPass => NodeKind::LowPass,
            ModParam::HighPass => NodeKind::HighPass,
            ModParam::ClipBoth | ModParam::ClipLow | ModParam::ClipHigh => NodeKind::Clip,
        }
    }
}

/// Linear ramp: `start` before `start_at`, `end` after `end_at`, and a
/// straight line in between. Looks like `⎽╱⎺` or `⎺╲⎽`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModulator {
    pub start: f32,
    pub end: f32,
    pub start_at: AudioTime,
    pub end_at: AudioTime,
}

/// Step: `before` until `time`, `after` from then on. Looks like `⎽│⎺`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoldModulator {
    pub before: f32,
    pub after: f32,
    pub time: AudioTime,
}

impl From<HoldModulator> for LinearModulator {
    fn from(m: HoldModulator) -> Self {
        Self {
            start: m.before,
            end: m.after,
            start_at: m.time,
            end_at: m.time,
        }
    }
}

/// Sine LFO oscillating between `low` and `high` at `freq` Hz. Looks like `∿`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SineModulator {
    pub freq: f32,
    pub low: f32,
    pub high: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_param_ordinals() {
        let zeros = [
            ModParam::Sine,
            ModParam::Square,
            ModParam::Sawtooth,
            ModParam::Triangle,
            ModParam::Gain,
            ModParam::Pan,
            ModParam::Mute,
            ModParam::Pause,
            ModParam::LowPass,
            ModParam::HighPass,
            ModParam::ClipBoth,
        ];
        assert!(zeros.iter().all(|p| p.raw() == 0));
        assert_eq!(ModParam::ClipLow.raw(), 1);
        assert_eq!(ModParam::ClipHigh.raw(), 2);
    }

    #[test]
    fn test_mod_param_node_kind() {
        assert_eq!(ModParam::Gain.node_kind(), NodeKind::Gain);
        assert_eq!(ModParam::ClipHigh.node_kind(), NodeKind::Clip);
        assert_ne!(ModParam::Sine.node_kind(), ModParam::Square.node_kind());
    }

    #[test]
    fn test_hold_is_degenerate_linear() {
        let hold = HoldModulator {
            before: 1.0,
            after: 0.0,
            time: AudioTime::seconds(3),
        };
        let lin = LinearModulator::from(hold);
        assert_eq!(lin.start_at, lin.end_at);
        assert_eq!((lin.start, lin.end), (1.0, 0.0));
    }
}
