//! # Single-Block Cipher
//!
//! Encrypts up to 16 bytes into one curve point: pad, embed with
//! [`PointCodec`], then scale by the epoch encryption exponent.
//!
//! The padded payload is 17 bytes, so even a 16-byte plaintext carries a pad byte
//! and unpadding is unambiguous. The remaining 15 frame bytes are the random prefix.
//! The permutation runs under the all-zero IV; the random prefix is what makes
//! each encryption distinct.

use crate::aliases::PermutationKey;
use crate::builders::codec_config::CodecConfig;
use crate::codec::PointCodec;
use crate::consts::{SINGLE_MAX_PLAINTEXT, SINGLE_PAYLOAD_LEN};
use crate::crypto::prp::zero_iv;
use crate::curve::CurvePoint;
use crate::error::ShineError;
use crate::keys::EpochKey;
use crate::padding::{pad, unpad};

/// Encrypt at most 16 bytes under `key` with default codec settings.
#[inline]
pub fn enc(
    key: &EpochKey,
    plaintext: &[u8],
    perm_key: &PermutationKey,
) -> Result<CurvePoint, ShineError> {
    enc_with(key, plaintext, perm_key, &CodecConfig::default())
}

/// Encrypt at most 16 bytes under `key`.
///
/// The permutation runs under the fixed all-zero IV, not a per-message random
/// one. The 17-byte payload reaches into the first AES block, so a random IV
/// would have to travel next to the point, and a ciphertext is one point with
/// nothing beside it. The 15-byte random prefix, resampled on every attempt,
/// keeps repeated encryptions of the same plaintext distinct.
///
/// # Errors
///
/// - [`ShineError::OversizedInput`] if `plaintext` is longer than 16 bytes
/// - [`ShineError::EncodeRetriesExhausted`] if the codec hits its retry cap
pub fn enc_with(
    key: &EpochKey,
    plaintext: &[u8],
    perm_key: &PermutationKey,
    config: &CodecConfig,
) -> Result<CurvePoint, ShineError> {
    if plaintext.len() > SINGLE_MAX_PLAINTEXT {
        return Err(ShineError::OversizedInput {
            len: plaintext.len(),
            max: SINGLE_MAX_PLAINTEXT,
        });
    }

    let payload = pad::<SINGLE_PAYLOAD_LEN>(plaintext)?;
    let codec = PointCodec::new(perm_key, config);
    let embedded = codec.encode(payload.expose_secret(), &zero_iv())?;

    Ok(embedded.mul(key.encryption_scalar()))
}

/// Decrypt a single-block ciphertext.
///
/// # Errors
///
/// [`ShineError::PaddingError`] if the recovered payload is not validly padded,
/// typically a wrong key or a ciphertext from a different permutation key.
pub fn dec(
    key: &EpochKey,
    ciphertext: &CurvePoint,
    perm_key: &PermutationKey,
) -> Result<Vec<u8>, ShineError> {
    let embedded = ciphertext.mul(key.decryption_scalar());
    let codec = PointCodec::new(perm_key, &CodecConfig::default());
    let payload = codec.decode::<SINGLE_PAYLOAD_LEN>(&embedded, &zero_iv());

    Ok(unpad(payload.expose_secret())?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keygen;

    fn perm_key() -> PermutationKey {
        PermutationKey::new([0x24; 32])
    }

    #[test]
    fn roundtrip_every_length() {
        let key = keygen().unwrap();
        for len in 0..=SINGLE_MAX_PLAINTEXT {
            let plaintext: Vec<u8> = (0..len as u8).collect();
            let ct = enc(&key, &plaintext, &perm_key()).unwrap();
            assert_eq!(dec(&key, &ct, &perm_key()).unwrap(), plaintext, "len {len}");
        }
    }

    #[test]
    fn seventeen_bytes_rejected() {
        let key = keygen().unwrap();
        assert_eq!(
            enc(&key, &[0u8; 17], &perm_key()).unwrap_err(),
            ShineError::OversizedInput { len: 17, max: 16 }
        );
    }

    #[test]
    fn plaintext_ending_in_pad_like_byte() {
        let key = keygen().unwrap();
        let plaintext = [0x01u8; 16];
        let ct = enc(&key, &plaintext, &perm_key()).unwrap();
        assert_eq!(dec(&key, &ct, &perm_key()).unwrap(), plaintext);
    }
}
