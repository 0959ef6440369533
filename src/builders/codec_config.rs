//! src/builders/codec_config.rs
//! Point-codec configuration

use crate::consts::DEFAULT_MAX_ENCODE_ATTEMPTS;

/// Configuration for [`PointCodec`](crate::codec::PointCodec).
///
/// Default: [`DEFAULT_MAX_ENCODE_ATTEMPTS`] rejection-sampling attempts per point.
///
/// # Thread Safety
///
/// Plain `Copy` data; share freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    max_attempts: u32,
}

impl CodecConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ENCODE_ATTEMPTS,
        }
    }

    /// Set the retry cap (minimum 1)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
