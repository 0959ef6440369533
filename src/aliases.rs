//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every type requires an explicit `.expose_secret()` / `.expose_secret_mut()` to reach the bytes.
//!
//! ### Semantic Fixed-Size Types
//! - [`PermutationKey`] - 32-byte AES-256 key for the block permutation
//! - [`Iv16`] - 16-byte CBC initialization vector
//! - [`Nonce15`] - 15-byte OCBSHINE message nonce
//! - [`Frame32`] - 32-byte embedding frame (random prefix ‖ payload)

use crate::consts::{FRAME_LEN, NONCE_LEN};

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type PermutationKey = SpanBuffer<32>; // AES-256 key, shared out of band
pub type Iv16 = SpanBuffer<16>; // header IV, single-block IV, Nonce ‖ index
pub type Nonce15 = SpanBuffer<NONCE_LEN>;
pub type Frame32 = SpanBuffer<FRAME_LEN>;
