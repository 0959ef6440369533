// src/bulk/mod.rs

//! # OCBSHINE Bulk Mode
//!
//! Messages longer than one point are cut into 31-byte blocks. Each block is
//! embedded with a one-byte random sentinel under its own IV `Nonce ‖ index`,
//! then scaled by the epoch key. A header point carrying the frame
//! `nonce ‖ random filler` (embedded under the all-zero IV) is appended last.
//!
//! Wire order is load-bearing: data blocks `0..n` first, header at index `n`.
//!
//! The final block is always PKCS#7 padded; data whose length is a multiple of
//! 31 (including empty data) gains a whole padding block. Because the index is a
//! single byte, one message holds at most 256 blocks.
//!
//! **Nonce precondition:** nonces must never repeat under one permutation key.
//! [`ocb_enc`] draws a fresh 15-byte nonce from the OS RNG on every call;
//! [`ocb_enc_with_nonce`] hands that responsibility to the caller.

pub(crate) mod ciphertext;
pub(crate) mod decrypt;
pub(crate) mod encrypt;

pub use ciphertext::BulkCiphertext;
pub use decrypt::ocb_dec;
pub use encrypt::{ocb_enc, ocb_enc_with, ocb_enc_with_nonce};

use crate::aliases::{Iv16, Nonce15, SpanBuffer};
use crate::codec::PointCodec;
use crate::consts::{AES_BLOCK_LEN, BULK_BLOCK_LEN, BULK_MAX_DATA_LEN, NONCE_LEN};
use crate::crypto::prp::zero_iv;
use crate::curve::CurvePoint;
use crate::error::ShineError;
use crate::padding::{pad, unpad};

pub(crate) type BulkBlock = SpanBuffer<BULK_BLOCK_LEN>;

/// Cut `data` into full blocks plus one padded final block.
pub(crate) fn split_blocks(data: &[u8]) -> Result<Vec<BulkBlock>, ShineError> {
    if data.len() > BULK_MAX_DATA_LEN {
        return Err(ShineError::OversizedInput {
            len: data.len(),
            max: BULK_MAX_DATA_LEN,
        });
    }

    let mut chunks = data.chunks_exact(BULK_BLOCK_LEN);
    let mut blocks: Vec<BulkBlock> = chunks
        .by_ref()
        .map(|chunk| {
            let mut block = BulkBlock::new([0u8; BULK_BLOCK_LEN]);
            block.expose_secret_mut().copy_from_slice(chunk);
            block
        })
        .collect();
    blocks.push(pad::<BULK_BLOCK_LEN>(chunks.remainder())?);
    Ok(blocks)
}

/// Concatenate decoded blocks, stripping padding from the final block only.
pub(crate) fn join_blocks(blocks: &[BulkBlock]) -> Result<Vec<u8>, ShineError> {
    let Some((last, full)) = blocks.split_last() else {
        return Err(ShineError::MalformedCiphertext("no data blocks".into()));
    };
    let tail = unpad(last.expose_secret())?;

    let mut data = Vec::with_capacity(full.len() * BULK_BLOCK_LEN + tail.len());
    for block in full {
        data.extend_from_slice(block.expose_secret());
    }
    data.extend_from_slice(tail);
    Ok(data)
}

/// `Nonce ‖ index`. Callers keep `index` below 256.
pub(crate) fn block_iv(nonce: &Nonce15, index: usize) -> Iv16 {
    debug_assert!(index <= u8::MAX as usize);
    let mut iv = Iv16::new([0u8; AES_BLOCK_LEN]);
    iv.expose_secret_mut()[..NONCE_LEN].copy_from_slice(nonce.expose_secret());
    iv.expose_secret_mut()[NONCE_LEN] = index as u8;
    iv
}

pub(crate) fn encode_header(codec: &PointCodec, nonce: &Nonce15) -> Result<CurvePoint, ShineError> {
    codec.encode_leading(nonce.expose_secret(), &zero_iv())
}

pub(crate) fn decode_header(codec: &PointCodec, point: &CurvePoint) -> Nonce15 {
    codec.decode_leading::<NONCE_LEN>(point, &zero_iv())
}

pub(crate) fn encode_block(
    codec: &PointCodec,
    nonce: &Nonce15,
    index: usize,
    block: &BulkBlock,
) -> Result<CurvePoint, ShineError> {
    codec.encode(block.expose_secret(), &block_iv(nonce, index))
}

pub(crate) fn decode_block(
    codec: &PointCodec,
    nonce: &Nonce15,
    index: usize,
    point: &CurvePoint,
) -> BulkBlock {
    codec.decode::<BULK_BLOCK_LEN>(point, &block_iv(nonce, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BULK_MAX_BLOCKS;

    #[test]
    fn block_counts_at_boundaries() {
        let cases = [(0, 1), (1, 1), (30, 1), (31, 2), (32, 2), (62, 3), (BULK_MAX_DATA_LEN, BULK_MAX_BLOCKS)];
        for (len, expected) in cases {
            let blocks = split_blocks(&vec![0xaa; len]).unwrap();
            assert_eq!(blocks.len(), expected, "len {len}");
            assert_eq!(join_blocks(&blocks).unwrap(), vec![0xaa; len]);
        }
    }

    #[test]
    fn oversized_data_rejected() {
        let len = BULK_MAX_DATA_LEN + 1;
        assert_eq!(
            split_blocks(&vec![0u8; len]).unwrap_err(),
            ShineError::OversizedInput {
                len,
                max: BULK_MAX_DATA_LEN
            }
        );
    }

    #[test]
    fn block_iv_layout() {
        let nonce = Nonce15::new([0xcd; NONCE_LEN]);
        let iv = block_iv(&nonce, 255);
        assert_eq!(iv.expose_secret()[..NONCE_LEN], [0xcd; NONCE_LEN]);
        assert_eq!(iv.expose_secret()[NONCE_LEN], 0xff);
        assert_ne!(
            block_iv(&nonce, 0).expose_secret(),
            block_iv(&nonce, 1).expose_secret()
        );
    }

    #[test]
    fn header_frame_starts_with_nonce() {
        let codec = PointCodec::new(
            &crate::aliases::PermutationKey::new([0x11; 32]),
            &crate::builders::codec_config::CodecConfig::default(),
        );
        let nonce = Nonce15::new([0x9c; NONCE_LEN]);
        let header = encode_header(&codec, &nonce).unwrap();

        let frame = codec.decode_frame(&header, &zero_iv());
        assert_eq!(frame.expose_secret()[..NONCE_LEN], [0x9c; NONCE_LEN]);
        assert_eq!(decode_header(&codec, &header).expose_secret(), nonce.expose_secret());
    }

    #[test]
    fn only_final_block_is_unpadded() {
        // A full middle block of 0x01 bytes must survive intact
        let data = vec![0x01u8; 40];
        let blocks = split_blocks(&data).unwrap();
        assert_eq!(join_blocks(&blocks).unwrap(), data);
    }
}
