//! firefly-wasm: the WASM side of the Firefly Zero guest SDK.
//!
//! Binds [`firefly_core`] to the runtime's real imports and provides the
//! macros that export an app's `boot`, `update` and `render_line` callbacks
//! under the names the runtime looks for.

mod imports;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;

pub use firefly_core;
pub use firefly_core::*;
pub use imports::WasmHost;

/// The typed API bound to the running host.
pub const fn sdk() -> Firefly<WasmHost> {
    Firefly::new(WasmHost)
}

/// Install a global `tracing` subscriber that writes to the host log.
///
/// Call once from `boot`. Fails on an unknown level or when a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let level = config.level_filter().context("invalid log config")?;
    let layer = HostLogLayer::new(WasmHost).with_target(config.with_target);
    let subscriber = tracing_subscriber::registry().with(level).with(layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("a global tracing subscriber is already installed")?;
    tracing::debug!(level = %level, "host logging ready");
    Ok(())
}

/// Export `f` as the `boot` callback, run once when the app starts.
#[macro_export]
macro_rules! boot {
    ($f:path) => {
        #[unsafe(export_name = "boot")]
        pub extern "C" fn __firefly_boot() {
            $f()
        }
    };
}

/// Export `f` as the `update` callback, run once per frame before rendering.
#[macro_export]
macro_rules! update {
    ($f:path) => {
        #[unsafe(export_name = "update")]
        pub extern "C" fn __firefly_update() {
            $f()
        }
    };
}

/// Export `f` as the `render_line` callback. It receives the line about to be
/// drawn and returns the next line it wants to be called for.
#[macro_export]
macro_rules! render_line {
    ($f:path) => {
        #[unsafe(export_name = "render_line")]
        pub extern "C" fn __firefly_render_line(line: i32) -> i32 {
            $f(line)
        }
    };
}
