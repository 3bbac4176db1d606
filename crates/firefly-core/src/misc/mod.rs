use crate::buffer::Buffer;
use crate::config::ConfigError;
use crate::host::Misc;
use crate::Firefly;

/// Errors from the few SDK helpers that interpret host data.
///
/// Plain host calls never fail from the guest's point of view; only helpers
/// that parse what the host hands back can.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("device name is not valid UTF-8: {0}")]
    InvalidName(#[from] core::str::Utf8Error),
}

/// Longest device name the host hands out.
pub const MAX_NAME_LEN: usize = 16;

impl<H: Misc> Firefly<H> {
    /// Write a debug message to the host log.
    pub fn log_debug(&self, msg: &str) {
        self.host().log_debug(msg);
    }

    /// Write an error message to the host log.
    pub fn log_error(&self, msg: &str) {
        self.host().log_error(msg);
    }

    /// Seed the host's random number generator.
    pub fn set_seed(&self, seed: u32) {
        self.host().set_seed(seed);
    }

    pub fn get_random(&self) -> u32 {
        self.host().get_random()
    }

    /// Copy the device name into `buf`, truncated to its capacity.
    pub fn get_name<'a>(&self, buf: &'a mut [u8]) -> Buffer<'a> {
        let reported = self.host().get_name(buf) as usize;
        if reported > buf.len() {
            tracing::warn!(
                reported,
                capacity = buf.len(),
                "device name does not fit the buffer, truncated"
            );
        }
        let size = reported.min(buf.len());
        Buffer::new(&buf[..size])
    }

    /// The device name as text.
    pub fn get_name_str<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str, SdkError> {
        let name = self.get_name(buf).as_bytes();
        Ok(core::str::from_utf8(name)?)
    }

    /// Ask the runtime to restart the app from `boot`.
    pub fn restart(&self) {
        tracing::info!("restart requested");
        self.host().restart();
    }

    /// Ask the runtime to exit the app.
    pub fn quit(&self) {
        tracing::info!("quit requested");
        self.host().quit();
    }
}
