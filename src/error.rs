//! # Error Types
//!
//! All operations return [`Result<T, ShineError>`](ShineError).

use thiserror::Error;

/// The error type for every encoding, key and cipher operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShineError {
    /// Coordinates do not describe a point on secp256k1.
    ///
    /// Inside the encoder this is a rejection-sampling miss and is retried. At a
    /// parsing boundary it means the bytes are not a valid, non-identity point.
    #[error("invalid curve point")]
    InvalidCurvePoint,

    /// The encoder hit its retry cap without finding an embeddable candidate.
    #[error("point encoding gave up after {attempts} attempts")]
    EncodeRetriesExhausted { attempts: u32 },

    /// The sampled encryption exponent has no inverse modulo the group order.
    #[error("epoch key is not invertible")]
    KeyInversionFailure,

    /// A serialized scalar is zero or not reduced modulo the group order.
    #[error("invalid scalar encoding")]
    InvalidScalar,

    /// Input exceeds the fixed width of the mode.
    #[error("input of {len} bytes exceeds the {max}-byte limit")]
    OversizedInput { len: usize, max: usize },

    /// Unpadding found an invalid pattern, usually from a corrupted or mis-keyed ciphertext.
    #[error("invalid padding")]
    PaddingError,

    /// Bulk ciphertext with the wrong shape: too few or too many points, or a bad entry.
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// The operating system randomness source failed.
    #[error("random source failure: {0}")]
    Rng(String),
}
