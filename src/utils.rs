// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC chain in [`crate::crypto::prp`].
///
/// # Panics (by contract)
///
/// Panics if any argument is shorter than 16 bytes. All callers pass exact
/// 16-byte halves of a [`crate::aliases::Frame32`] or an [`crate::aliases::Iv16`].
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_involutive() {
        let a = [0x5au8; 16];
        let b: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut out = [0u8; 16];
        xor_blocks(&a, &b, &mut out);
        let mut back = [0u8; 16];
        xor_blocks(&out, &b, &mut back);
        assert_eq!(back, a);
    }
}
