//! tests/common.rs
//! Common constants and helpers shared across test files

use shine_ue::PermutationKey;

/// Fixed permutation key used by most tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PERM_KEY: [u8; 32] = [0x5c; 32];

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

/// Bulk lengths around the 31-byte block boundary
#[allow(dead_code)] // Used across multiple test files
pub const BULK_BOUNDARY_LENGTHS: &[usize] = &[0, 1, 30, 31, 32, 61, 62, 63, 100];

#[allow(dead_code)] // Used across multiple test files
pub fn perm_key() -> PermutationKey {
    PermutationKey::new(TEST_PERM_KEY)
}

/// Deterministic, non-repeating filler so block mix-ups show up in comparisons
#[allow(dead_code)] // Used across multiple test files
pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}
