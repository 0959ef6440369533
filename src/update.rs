//! # Update Engine
//!
//! Re-encrypts ciphertexts under a new epoch by scaling every point with an
//! [`UpdateToken`]. Nothing is decoded and the permutation key is never needed.

use crate::bulk::BulkCiphertext;
use crate::curve::CurvePoint;
use crate::keys::UpdateToken;

/// Move a single-block ciphertext to the token's target epoch.
#[inline]
pub fn upd(token: &UpdateToken, ciphertext: &CurvePoint) -> CurvePoint {
    ciphertext.mul(token.scalar())
}

/// Move every point of a bulk ciphertext, header included, to the token's target epoch.
pub fn ocb_upd(token: &UpdateToken, ciphertext: &BulkCiphertext) -> BulkCiphertext {
    tracing::trace!(points = ciphertext.point_count(), "applying update token");
    ciphertext.map_points(|point| upd(token, point))
}
