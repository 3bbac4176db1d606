//! firefly-core: typed guest API for the Firefly Zero runtime.
//!
//! Every wrapper on [`Firefly`] decomposes friendly value types into the flat
//! scalar arguments of one host import and recomposes the scalar result. The
//! host itself is abstracted behind the traits in [`host`], so the same
//! wrappers run against the real WASM imports (see the `firefly-wasm` crate)
//! or against [`host::recording::RecordingHost`] in tests.

pub mod audio;
pub mod buffer;
pub mod config;
pub mod fs;
pub mod graphics;
pub mod host;
pub mod input;
pub mod misc;
pub mod net;
pub mod observe;
pub mod stats;

pub use audio::{
    AudioNode, AudioTime, HoldModulator, LinearModulator, ModParam, NodeKind, SineModulator,
    SAMPLE_RATE,
};
pub use buffer::{Buffer, File, Image, SubImage};
pub use config::{Config, ConfigError, LogConfig};
pub use graphics::{
    degrees, radians, Angle, Canvas, CanvasGuard, Color, LineStyle, Point, Rgb, Size, Style,
    HEIGHT, WIDTH,
};
pub use host::{Audio, Fs, Graphics, Host, Input, Misc};
pub use input::{Buttons, Pad};
pub use misc::SdkError;
pub use net::{is_online, Peer, Peers};
pub use observe::HostLogLayer;
pub use stats::{Badge, Board, Progress};

/// Entry point to the typed API.
///
/// Wraps a host implementation; each subsystem adds its methods in its own
/// module, bounded only by the capability trait it needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Firefly<H> {
    host: H,
}

impl<H> Firefly<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The underlying host, for calls that need the raw scalar interface.
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
