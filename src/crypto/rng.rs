// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets
//!
//! Adds `T::random()` to every `SpanBuffer<N>` (`Iv16`, `Nonce15`, `PermutationKey`, …)
//! using a thread-local `OsRng`. Failures of the OS source are reported, never ignored.

use crate::error::ShineError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, ShineError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fill `dest` from the thread-local OS generator.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), ShineError> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(dest)
            .map_err(|e| ShineError::Rng(e.to_string()))
    })
}

/// Blanket impl – every `Fixed<[u8; N]>` gets `.random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, ShineError> {
        let mut buf = Fixed::new([0u8; N]);
        fill_random(buf.expose_secret_mut())?;
        Ok(buf)
    }
}
