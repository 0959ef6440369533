//! # Constants
//!
//! Curve parameters, frame widths and retry caps used throughout the library.
//! All values are compile-time constants; nothing here is mutable at runtime.

/// Width of the x-coordinate embedding frame (one secp256k1 field element).
pub const FRAME_LEN: usize = 32;

/// AES block width; the permutation runs over `FRAME_LEN / AES_BLOCK_LEN` chained blocks.
pub const AES_BLOCK_LEN: usize = 16;

/// Maximum plaintext accepted by single-block mode.
pub const SINGLE_MAX_PLAINTEXT: usize = 16;

/// Padded single-block payload: up to 16 plaintext bytes plus at least one pad byte.
pub const SINGLE_PAYLOAD_LEN: usize = SINGLE_MAX_PLAINTEXT + 1;

/// Random prefix prepended to a single-block payload before permutation.
pub const SINGLE_PREFIX_LEN: usize = FRAME_LEN - SINGLE_PAYLOAD_LEN;

/// Payload bytes carried by one OCBSHINE data block.
pub const BULK_BLOCK_LEN: usize = 31;

/// Random sentinel bytes prepended to each OCBSHINE data block.
pub const BULK_SENTINEL_LEN: usize = FRAME_LEN - BULK_BLOCK_LEN;

/// OCBSHINE nonce length. The nonce plus a one-byte block index forms a block IV.
pub const NONCE_LEN: usize = 15;

/// Random filler placed after the nonce in the header frame.
pub const HEADER_FILLER_LEN: usize = FRAME_LEN - NONCE_LEN;

/// The block index is a single byte, so one message holds at most 256 data blocks.
pub const BULK_MAX_BLOCKS: usize = u8::MAX as usize + 1;

/// Largest message OCBSHINE accepts. The final block always carries at least one pad byte.
pub const BULK_MAX_DATA_LEN: usize = BULK_MAX_BLOCKS * BULK_BLOCK_LEN - 1;

/// Default cap on rejection-sampling attempts per encoded point.
///
/// Roughly half of all field elements are x-coordinates of a curve point, so the
/// expected cost is about two attempts; 128 misses in a row has probability ≈ 2⁻¹²⁸.
pub const DEFAULT_MAX_ENCODE_ATTEMPTS: u32 = 128;

/// Cap on scalar resampling in key generation.
pub const KEYGEN_MAX_ATTEMPTS: u32 = 16;

/// Square-root exponent `q = (P + 1) / 4` for the secp256k1 base field, little-endian limbs.
///
/// Valid because `P ≡ 3 (mod 4)`: if `a` is a quadratic residue then `a^q` is a root.
pub const SQRT_EXPONENT: [u64; 4] = [
    0xffff_ffff_bfff_ff0c,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
];

/// Constant term `b` of the curve equation `y² = x³ + b`.
pub const CURVE_B: u64 = 7;

/// Wire length of one point: uncompressed SEC1 `0x04 ‖ x ‖ y`.
pub const SEC1_UNCOMPRESSED_LEN: usize = 65;

/// SEC1 tag of the uncompressed form.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;
