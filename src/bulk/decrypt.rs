//! src/bulk/decrypt.rs
//! OCBSHINE decryption

use crate::aliases::PermutationKey;
use crate::builders::codec_config::CodecConfig;
use crate::bulk::ciphertext::{check_block_count, BulkCiphertext};
use crate::bulk::{decode_block, decode_header, join_blocks};
use crate::codec::PointCodec;
use crate::error::ShineError;
use crate::keys::EpochKey;

/// Decrypt an OCBSHINE ciphertext.
///
/// Recovers the nonce from the header (last point), then decodes each data
/// block under `Nonce ‖ index` and strips padding from the final block.
///
/// # Errors
///
/// - [`ShineError::MalformedCiphertext`] if the block count is out of range
/// - [`ShineError::PaddingError`] if the final block is not validly padded
pub fn ocb_dec(
    key: &EpochKey,
    ciphertext: &BulkCiphertext,
    perm_key: &PermutationKey,
) -> Result<Vec<u8>, ShineError> {
    check_block_count(ciphertext.block_count())?;

    let codec = PointCodec::new(perm_key, &CodecConfig::default());
    let d = key.decryption_scalar();

    let nonce = decode_header(&codec, &ciphertext.header().mul(d));
    let blocks: Vec<_> = ciphertext
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, point)| decode_block(&codec, &nonce, index, &point.mul(d)))
        .collect();

    join_blocks(&blocks)
}
