// src/lib.rs

//! Updatable encryption over secp256k1.
//!
//! Plaintext is embedded into curve points and masked by an epoch exponent.
//! An [`UpdateToken`] moves stored ciphertexts to a new epoch without decrypting.
//!
//! - Single-block mode ([`enc`], [`dec`], [`upd`]) carries up to 16 bytes in one point.
//! - OCBSHINE bulk mode ([`ocb_enc`], [`ocb_dec`], [`ocb_upd`]) chains 31-byte blocks
//!   under a shared nonce, with the nonce header as the final point.
//!
//! The scheme has no integrity tag. Structural checks reject malformed input, but
//! a well-formed ciphertext for the wrong key can decode to garbage.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod bulk;
pub mod codec;
pub mod consts;
pub mod crypto;
pub mod curve;
pub mod error;
pub mod keys;
pub mod padding;
pub mod single;
pub mod update;
pub mod utils;

// High-level API
pub use bulk::{ocb_dec, ocb_enc, ocb_enc_with, ocb_enc_with_nonce, BulkCiphertext};
pub use keys::{keygen, tokengen, EpochKey, UpdateToken};
pub use single::{dec, enc, enc_with};
pub use update::{ocb_upd, upd};

pub use aliases::{Nonce15, PermutationKey};
pub use builders::codec_config::CodecConfig;
pub use codec::PointCodec;
pub use crypto::rng::SecureRandomExt;
pub use curve::CurvePoint;
pub use error::ShineError;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{ocb_dec_par, ocb_enc_par, ocb_enc_par_with, ocb_upd_par, upd_batch};
