use serde::{Deserialize, Serialize};

/// Samples per second of the host audio engine.
pub const SAMPLE_RATE: u32 = 44_100;

/// A time or duration for audio modulators, counted in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct AudioTime(u32);

impl AudioTime {
    pub const ZERO: AudioTime = AudioTime(0);

    pub const fn from_samples(n: u32) -> Self {
        Self(n)
    }

    /// Whole seconds. Saturates at `u32::MAX` samples (a bit over a day).
    pub const fn seconds(n: u32) -> Self {
        Self(n.saturating_mul(SAMPLE_RATE))
    }

    /// Milliseconds, truncated to a whole sample.
    pub const fn milliseconds(n: u32) -> Self {
        let s = n as u64 * SAMPLE_RATE as u64 / 1000;
        if s > u32::MAX as u64 {
            Self(u32::MAX)
        } else {
            Self(s as u32)
        }
    }

    pub const fn samples(self) -> u32 {
        self.0
    }
}

pub const fn samples(n: u32) -> AudioTime {
    AudioTime::from_samples(n)
}

pub const fn seconds(n: u32) -> AudioTime {
    AudioTime::seconds(n)
}

pub const fn milliseconds(n: u32) -> AudioTime {
    AudioTime::milliseconds(n)
}
