//! # Epoch Keys and Update Tokens
//!
//! An [`EpochKey`] is a pair `(e, d)` with `d ≡ e⁻¹ (mod N)`. Ciphertexts are points
//! scaled by `e`; decryption scales by `d`. An [`UpdateToken`] `Δ = d_old · e_new`
//! moves a ciphertext from one epoch to the next without exposing the embedded point.
//!
//! Both types zeroize their scalars on drop. Discard a token once every stored
//! ciphertext has been updated: anyone holding it and a new-epoch key can reach
//! the old epoch.

use crate::aliases::SpanBuffer;
use crate::consts::KEYGEN_MAX_ATTEMPTS;
use crate::crypto::rng::SecureRandomExt;
use crate::curve::field_bytes_to_array;
use crate::error::ShineError;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use std::fmt;
use zeroize::Zeroize;

/// Encryption/decryption exponent pair for one rotation period.
#[derive(Clone)]
pub struct EpochKey {
    e: Scalar,
    d: Scalar,
}

impl EpochKey {
    /// Rebuild a key from a persisted encryption exponent.
    ///
    /// Returns [`ShineError::KeyInversionFailure`] if `bytes` is zero or not below
    /// the group order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, ShineError> {
        let e = parse_scalar(bytes).ok_or(ShineError::KeyInversionFailure)?;
        let d: Option<Scalar> = e.invert().into();
        let d = d.ok_or(ShineError::KeyInversionFailure)?;
        Ok(Self { e, d })
    }

    /// Encryption exponent, big-endian. The decryption half is recomputed on load.
    pub fn to_bytes(&self) -> [u8; 32] {
        field_bytes_to_array(&self.e.to_bytes())
    }

    pub fn encryption_scalar(&self) -> &Scalar {
        &self.e
    }

    pub fn decryption_scalar(&self) -> &Scalar {
        &self.d
    }
}

impl Drop for EpochKey {
    fn drop(&mut self) {
        self.e.zeroize();
        self.d.zeroize();
    }
}

impl fmt::Debug for EpochKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EpochKey([REDACTED])")
    }
}

/// Scalar that re-encrypts a ciphertext from one epoch to the next.
#[derive(Clone)]
pub struct UpdateToken {
    delta: Scalar,
}

impl UpdateToken {
    /// Parse a transported token. Zero or unreduced values are rejected.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, ShineError> {
        parse_scalar(bytes)
            .map(|delta| Self { delta })
            .ok_or(ShineError::InvalidScalar)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        field_bytes_to_array(&self.delta.to_bytes())
    }

    pub fn scalar(&self) -> &Scalar {
        &self.delta
    }
}

impl Drop for UpdateToken {
    fn drop(&mut self) {
        self.delta.zeroize();
    }
}

impl fmt::Debug for UpdateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UpdateToken([REDACTED])")
    }
}

/// Generate a fresh epoch key from the OS RNG.
///
/// Candidates at or above the group order, or (with negligible probability) zero,
/// are resampled up to [`KEYGEN_MAX_ATTEMPTS`] times.
pub fn keygen() -> Result<EpochKey, ShineError> {
    for attempt in 1..=KEYGEN_MAX_ATTEMPTS {
        let candidate = SpanBuffer::<32>::random()?;
        match EpochKey::from_bytes(candidate.expose_secret()) {
            Ok(key) => return Ok(key),
            Err(ShineError::KeyInversionFailure) => {
                tracing::debug!(attempt, "epoch key candidate not invertible; resampling");
            }
            Err(e) => return Err(e),
        }
    }
    tracing::warn!(attempts = KEYGEN_MAX_ATTEMPTS, "epoch key generation exhausted");
    Err(ShineError::KeyInversionFailure)
}

/// `Δ = old.d · new.e (mod N)`. For any `C = old.e · P`, `Δ · C = new.e · P`.
pub fn tokengen(old: &EpochKey, new: &EpochKey) -> UpdateToken {
    UpdateToken {
        delta: old.d * new.e,
    }
}

fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(*bytes)).into();
    scalar.filter(|s| !bool::from(s.is_zero()))
}
