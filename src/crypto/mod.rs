// src/crypto/mod.rs

//! Low-level primitives: OS randomness and the keyed block permutation.
//!
//! Curve arithmetic lives in [`crate::curve`]; these modules only handle bytes.

pub mod prp;
pub mod rng;
