//! src/crypto/prp.rs
//! Keyed pseudorandom permutation over one 32-byte embedding frame
//!
//! AES-256 chained in CBC mode across exactly two blocks, no padding. The
//! permutation only scrambles the frame so its integer value looks uniform;
//! confidentiality comes from the epoch key, not from this layer.

use crate::aliases::{Frame32, Iv16, PermutationKey};
use crate::consts::AES_BLOCK_LEN;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256, Block as AesBlock};
use std::fmt;

/// The all-zero IV used by single-block mode and the OCBSHINE header.
#[inline]
pub fn zero_iv() -> Iv16 {
    Iv16::new([0u8; AES_BLOCK_LEN])
}

/// AES-256-CBC over a fixed 32-byte frame.
///
/// # Thread Safety
///
/// Holds only the expanded key schedule, so one instance can be shared across
/// threads when blocks are encoded in parallel.
#[derive(Clone)]
pub struct BlockPermutation {
    cipher: Aes256,
}

impl BlockPermutation {
    pub fn new(key: &PermutationKey) -> Self {
        Self {
            cipher: Aes256::new(key.expose_secret().into()),
        }
    }

    /// Forward direction: `c₁ = E(p₁ ⊕ iv)`, `c₂ = E(p₂ ⊕ c₁)`.
    pub fn permute(&self, iv: &Iv16, input: &Frame32, output: &mut Frame32) {
        let mut prev = *iv.expose_secret();
        let mut mixed = [0u8; AES_BLOCK_LEN];

        for half in 0..2 {
            let range = half * AES_BLOCK_LEN..(half + 1) * AES_BLOCK_LEN;
            xor_blocks(&input.expose_secret()[range.clone()], &prev, &mut mixed);
            let mut aes_block = AesBlock::from(mixed);
            self.cipher.encrypt_block(&mut aes_block);
            output.expose_secret_mut()[range].copy_from_slice(aes_block.as_ref());
            prev.copy_from_slice(aes_block.as_ref());
        }
    }

    /// Inverse direction: `p₁ = D(c₁) ⊕ iv`, `p₂ = D(c₂) ⊕ c₁`.
    pub fn invert(&self, iv: &Iv16, input: &Frame32, output: &mut Frame32) {
        let mut prev = *iv.expose_secret();

        for half in 0..2 {
            let range = half * AES_BLOCK_LEN..(half + 1) * AES_BLOCK_LEN;
            let mut block_bytes = [0u8; AES_BLOCK_LEN];
            block_bytes.copy_from_slice(&input.expose_secret()[range.clone()]);
            let mut aes_block = AesBlock::from(block_bytes);
            self.cipher.decrypt_block(&mut aes_block);
            xor_blocks(
                aes_block.as_slice(),
                &prev,
                &mut output.expose_secret_mut()[range],
            );
            prev = block_bytes;
        }
    }
}

impl fmt::Debug for BlockPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockPermutation").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(bytes: [u8; 32]) -> Frame32 {
        Frame32::new(bytes)
    }

    #[test]
    fn invert_undoes_permute() {
        let prp = BlockPermutation::new(&PermutationKey::new([0x11; 32]));
        let iv = Iv16::new([0x22; 16]);
        let input = frame(core::array::from_fn(|i| i as u8));

        let mut scrambled = frame([0u8; 32]);
        prp.permute(&iv, &input, &mut scrambled);
        assert_ne!(scrambled.expose_secret(), input.expose_secret());

        let mut restored = frame([0u8; 32]);
        prp.invert(&iv, &scrambled, &mut restored);
        assert_eq!(restored.expose_secret(), input.expose_secret());
    }

    #[test]
    fn second_block_depends_on_first() {
        let prp = BlockPermutation::new(&PermutationKey::new([0x33; 32]));
        let iv = zero_iv();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        b[0] = 1;

        let mut out_a = frame([0u8; 32]);
        let mut out_b = frame([0u8; 32]);
        prp.permute(&iv, &frame(a), &mut out_a);
        prp.permute(&iv, &frame(b), &mut out_b);
        assert_ne!(out_a.expose_secret()[16..], out_b.expose_secret()[16..]);

        a[31] = 1;
        b = a;
        b[31] = 2;
        prp.permute(&iv, &frame(a), &mut out_a);
        prp.permute(&iv, &frame(b), &mut out_b);
        assert_eq!(out_a.expose_secret()[..16], out_b.expose_secret()[..16]);
    }

    #[test]
    fn iv_changes_output() {
        let prp = BlockPermutation::new(&PermutationKey::new([0x44; 32]));
        let input = frame([0xab; 32]);
        let mut with_zero = frame([0u8; 32]);
        let mut with_other = frame([0u8; 32]);
        prp.permute(&zero_iv(), &input, &mut with_zero);
        prp.permute(&Iv16::new([1u8; 16]), &input, &mut with_other);
        assert_ne!(with_zero.expose_secret(), with_other.expose_secret());
    }
}
