//! Property-based tests for the updatable encryption scheme
//!
//! 1. **Key algebra**: `d · e ≡ 1 (mod N)` for every generated key
//! 2. **Round-trip**: `dec(enc(m)) == m` in both modes
//! 3. **Update correctness**: decrypting an updated ciphertext with the new key yields `m`

mod common;

use common::perm_key;
use k256::Scalar;
use proptest::prelude::*;
use shine_ue::consts::SINGLE_MAX_PLAINTEXT;
use shine_ue::{dec, enc, keygen, ocb_dec, ocb_enc, ocb_upd, tokengen, upd, EpochKey};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_keygen_exponents_inverse(_seed in any::<u8>()) {
        let key = keygen().unwrap();
        prop_assert_eq!(*key.encryption_scalar() * key.decryption_scalar(), Scalar::ONE);
    }

    #[test]
    fn prop_key_from_bytes_inverse(bytes in any::<[u8; 32]>()) {
        // Most 32-byte strings are valid scalars; the rest must be rejected, not panic
        if let Ok(key) = EpochKey::from_bytes(&bytes) {
            prop_assert_eq!(*key.encryption_scalar() * key.decryption_scalar(), Scalar::ONE);
            prop_assert_eq!(key.to_bytes(), bytes);
        }
    }

    #[test]
    fn prop_single_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..=SINGLE_MAX_PLAINTEXT),
    ) {
        let key = keygen().unwrap();
        let ct = enc(&key, &plaintext, &perm_key()).unwrap();
        prop_assert_eq!(dec(&key, &ct, &perm_key()).unwrap(), plaintext);
    }

    #[test]
    fn prop_single_update(
        plaintext in prop::collection::vec(any::<u8>(), 0..=SINGLE_MAX_PLAINTEXT),
    ) {
        let old = keygen().unwrap();
        let new = keygen().unwrap();
        let ct = upd(&tokengen(&old, &new), &enc(&old, &plaintext, &perm_key()).unwrap());
        prop_assert_eq!(dec(&new, &ct, &perm_key()).unwrap(), plaintext);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_bulk_roundtrip(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let key = keygen().unwrap();
        let ct = ocb_enc(&key, &data, &perm_key()).unwrap();
        prop_assert_eq!(ct.block_count(), data.len() / 31 + 1);
        prop_assert_eq!(ocb_dec(&key, &ct, &perm_key()).unwrap(), data);
    }

    #[test]
    fn prop_bulk_update(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let old = keygen().unwrap();
        let new = keygen().unwrap();
        let ct = ocb_upd(&tokengen(&old, &new), &ocb_enc(&old, &data, &perm_key()).unwrap());
        prop_assert_eq!(ocb_dec(&new, &ct, &perm_key()).unwrap(), data);
    }
}
