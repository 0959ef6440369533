//! src/bulk/encrypt.rs
//! OCBSHINE encryption

use crate::aliases::{Nonce15, PermutationKey};
use crate::builders::codec_config::CodecConfig;
use crate::bulk::ciphertext::BulkCiphertext;
use crate::bulk::{encode_block, encode_header, split_blocks};
use crate::codec::PointCodec;
use crate::crypto::rng::SecureRandomExt;
use crate::error::ShineError;
use crate::keys::EpochKey;

/// Encrypt `data` under `key` with a fresh random nonce and default codec settings.
#[inline]
pub fn ocb_enc(
    key: &EpochKey,
    data: &[u8],
    perm_key: &PermutationKey,
) -> Result<BulkCiphertext, ShineError> {
    ocb_enc_with(key, data, perm_key, &CodecConfig::default())
}

/// Encrypt `data` under `key` with a fresh random nonce.
///
/// # Errors
///
/// - [`ShineError::OversizedInput`] if `data` needs more than 256 blocks
/// - [`ShineError::EncodeRetriesExhausted`] if any block hits the retry cap
/// - [`ShineError::Rng`] if the OS random source fails
pub fn ocb_enc_with(
    key: &EpochKey,
    data: &[u8],
    perm_key: &PermutationKey,
    config: &CodecConfig,
) -> Result<BulkCiphertext, ShineError> {
    let nonce = Nonce15::random()?;
    ocb_enc_with_nonce(key, data, perm_key, &nonce, config)
}

/// Encrypt under a caller-supplied nonce.
///
/// The caller must never reuse `nonce` with the same `perm_key`; doing so gives
/// two messages identical block permutations.
pub fn ocb_enc_with_nonce(
    key: &EpochKey,
    data: &[u8],
    perm_key: &PermutationKey,
    nonce: &Nonce15,
    config: &CodecConfig,
) -> Result<BulkCiphertext, ShineError> {
    let blocks = split_blocks(data)?;
    let codec = PointCodec::new(perm_key, config);
    let e = key.encryption_scalar();

    let header = encode_header(&codec, nonce)?.mul(e);
    let points = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            tracing::trace!(index, "encoding block");
            encode_block(&codec, nonce, index, block).map(|point| point.mul(e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(blocks = points.len(), bytes = data.len(), "ocbshine encrypted");
    Ok(BulkCiphertext::from_parts(points, header))
}
