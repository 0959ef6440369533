//! # Padding
//!
//! PKCS#7 over a caller-chosen width. The pad value is always in `1..=W`, so
//! every padded block carries at least one pad byte and unpadding is unambiguous.

use crate::aliases::SpanBuffer;
use crate::error::ShineError;
use subtle::{Choice, ConstantTimeEq};

/// Pad `data` to exactly `W` bytes. `data` must be strictly shorter than `W`.
pub fn pad<const W: usize>(data: &[u8]) -> Result<SpanBuffer<W>, ShineError> {
    debug_assert!(W > 0 && W <= u8::MAX as usize);
    if data.len() >= W {
        return Err(ShineError::OversizedInput {
            len: data.len(),
            max: W - 1,
        });
    }

    let mut block = SpanBuffer::<W>::new([0u8; W]);
    let pad = (W - data.len()) as u8;
    block.expose_secret_mut()[..data.len()].copy_from_slice(data);
    block.expose_secret_mut()[data.len()..].fill(pad);
    Ok(block)
}

/// Strip PKCS#7 padding from a full block.
pub fn unpad(block: &[u8]) -> Result<&[u8], ShineError> {
    let Some(&pad) = block.last() else {
        return Err(ShineError::PaddingError);
    };

    // Range check on the pad byte is fine to branch on
    let pad_len = pad as usize;
    if pad_len == 0 || pad_len > block.len() {
        return Err(ShineError::PaddingError);
    }

    let start = block.len() - pad_len;
    let valid = block[start..]
        .iter()
        .fold(Choice::from(1), |acc, byte| acc & byte.ct_eq(&pad));
    if !bool::from(valid) {
        return Err(ShineError::PaddingError);
    }

    Ok(&block[..start])
}
