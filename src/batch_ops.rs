//! # Parallel Operations
//!
//! `rayon` variants of the bulk and update calls. Blocks depend only on
//! `(nonce, index, permutation key)`, so encoding, decoding and token
//! application map independently across blocks. Output shape and wire order are
//! identical to the sequential calls.

use rayon::prelude::*;

use crate::aliases::{Nonce15, PermutationKey};
use crate::builders::codec_config::CodecConfig;
use crate::bulk::ciphertext::check_block_count;
use crate::bulk::{
    decode_block, decode_header, encode_block, encode_header, join_blocks, split_blocks,
    BulkCiphertext,
};
use crate::codec::PointCodec;
use crate::crypto::rng::SecureRandomExt;
use crate::curve::CurvePoint;
use crate::error::ShineError;
use crate::keys::{EpochKey, UpdateToken};
use crate::update::upd;

/// Parallel [`ocb_enc`](crate::ocb_enc).
pub fn ocb_enc_par(
    key: &EpochKey,
    data: &[u8],
    perm_key: &PermutationKey,
) -> Result<BulkCiphertext, ShineError> {
    ocb_enc_par_with(key, data, perm_key, &CodecConfig::default())
}

/// Parallel [`ocb_enc_with`](crate::ocb_enc_with).
pub fn ocb_enc_par_with(
    key: &EpochKey,
    data: &[u8],
    perm_key: &PermutationKey,
    config: &CodecConfig,
) -> Result<BulkCiphertext, ShineError> {
    let nonce = Nonce15::random()?;
    let blocks = split_blocks(data)?;
    let codec = PointCodec::new(perm_key, config);
    let e = key.encryption_scalar();

    let header = encode_header(&codec, &nonce)?.mul(e);
    let points = blocks
        .par_iter()
        .enumerate()
        .map(|(index, block)| encode_block(&codec, &nonce, index, block).map(|point| point.mul(e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BulkCiphertext::from_parts(points, header))
}

/// Parallel [`ocb_dec`](crate::ocb_dec).
pub fn ocb_dec_par(
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
        .par_iter()
        .enumerate()
        .map(|(index, point)| decode_block(&codec, &nonce, index, &point.mul(d)))
        .collect();

    join_blocks(&blocks)
}

/// Parallel [`ocb_upd`](crate::ocb_upd).
pub fn ocb_upd_par(token: &UpdateToken, ciphertext: &BulkCiphertext) -> BulkCiphertext {
    let blocks = ciphertext
        .blocks()
        .par_iter()
        .map(|point| upd(token, point))
        .collect();
    BulkCiphertext::from_parts(blocks, upd(token, ciphertext.header()))
}

/// Re-encrypt a slice of single-block ciphertexts in parallel, preserving order.
pub fn upd_batch(token: &UpdateToken, ciphertexts: &[CurvePoint]) -> Vec<CurvePoint> {
    ciphertexts
        .par_iter()
        .map(|point| upd(token, point))
        .collect()
}
