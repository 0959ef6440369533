//! # Curve Points
//!
//! A thin, validated wrapper over secp256k1 affine points from `k256`.
//!
//! Every [`CurvePoint`] satisfies the curve equation and is not the identity, so
//! multiplying by a non-zero scalar always yields another valid ciphertext element.
//! The x-coordinate is a first-class accessor because the codec reads it directly.
//!
//! Points travel in the 65-byte uncompressed SEC1 form only. Both coordinates are
//! on the wire, so a flipped byte in either one breaks the curve equation and is
//! rejected at parse time. Compressed encodings are refused: a tampered compressed
//! x lifts to a valid point about half the time.

use crate::consts::{SEC1_UNCOMPRESSED_LEN, SEC1_UNCOMPRESSED_TAG};
use crate::error::ShineError;
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};

/// A validated, non-identity point on secp256k1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint(AffinePoint);

impl CurvePoint {
    /// The standard secp256k1 base point.
    pub fn generator() -> Self {
        Self(AffinePoint::GENERATOR)
    }

    /// Build a point from big-endian affine coordinates.
    ///
    /// Fails with [`ShineError::InvalidCurvePoint`] if either coordinate is not a
    /// reduced field element or `y² ≠ x³ + 7`.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Result<Self, ShineError> {
        let (x, y) = (FieldBytes::from(*x), FieldBytes::from(*y));
        Self::from_encoded(&EncodedPoint::from_affine_coordinates(&x, &y, false))
    }

    /// Big-endian x-coordinate.
    pub fn x_bytes(&self) -> [u8; 32] {
        field_bytes_to_array(&self.0.x())
    }

    /// Parse a 65-byte uncompressed SEC1 encoding.
    ///
    /// Any other length or tag, including the 33-byte compressed form, fails with
    /// [`ShineError::InvalidCurvePoint`].
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, ShineError> {
        if bytes.len() != SEC1_UNCOMPRESSED_LEN || bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(ShineError::InvalidCurvePoint);
        }
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| ShineError::InvalidCurvePoint)?;
        Self::from_encoded(&encoded)
    }

    /// Uncompressed SEC1 encoding `0x04 ‖ x ‖ y`.
    pub fn to_sec1_bytes(&self) -> [u8; SEC1_UNCOMPRESSED_LEN] {
        let encoded = self.0.to_encoded_point(false);
        let mut out = [0u8; SEC1_UNCOMPRESSED_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// Scalar multiplication. Callers pass only non-zero scalars (epoch exponents
    /// and update tokens), which keeps the result off the identity.
    pub(crate) fn mul(&self, scalar: &Scalar) -> Self {
        Self((ProjectivePoint::from(self.0) * scalar).to_affine())
    }

    fn from_encoded(encoded: &EncodedPoint) -> Result<Self, ShineError> {
        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(encoded).into();
        match affine {
            Some(point) if point != AffinePoint::IDENTITY => Ok(Self(point)),
            _ => Err(ShineError::InvalidCurvePoint),
        }
    }
}

pub(crate) fn field_bytes_to_array(bytes: &FieldBytes) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(bytes.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn arr(hex_str: &str) -> [u8; 32] {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    #[test]
    fn generator_from_known_coordinates() {
        let g = CurvePoint::from_coordinates(&arr(G_X), &arr(G_Y)).unwrap();
        assert_eq!(g, CurvePoint::generator());
        assert_eq!(g.x_bytes(), arr(G_X));
    }

    #[test]
    fn off_curve_coordinates_rejected() {
        let mut y = arr(G_Y);
        y[31] ^= 1;
        assert_eq!(
            CurvePoint::from_coordinates(&arr(G_X), &y),
            Err(ShineError::InvalidCurvePoint)
        );
    }

    #[test]
    fn unreduced_coordinate_rejected() {
        let x = [0xff; 32];
        assert_eq!(
            CurvePoint::from_coordinates(&x, &arr(G_Y)),
            Err(ShineError::InvalidCurvePoint)
        );
    }

    #[test]
    fn sec1_roundtrip() {
        let p = CurvePoint::generator().mul(&Scalar::from(12345u64));
        let bytes = p.to_sec1_bytes();
        assert_eq!(bytes[0], SEC1_UNCOMPRESSED_TAG);
        assert_eq!(&bytes[1..33], &p.x_bytes());
        assert_eq!(CurvePoint::from_sec1_bytes(&bytes).unwrap(), p);
    }

    #[test]
    fn compressed_encoding_rejected() {
        let p = CurvePoint::generator().mul(&Scalar::from(12345u64));
        let compressed = p.0.to_encoded_point(true);
        assert_eq!(compressed.as_bytes().len(), 33);
        assert_eq!(
            CurvePoint::from_sec1_bytes(compressed.as_bytes()),
            Err(ShineError::InvalidCurvePoint)
        );
    }

    #[test]
    fn identity_encoding_rejected() {
        assert_eq!(
            CurvePoint::from_sec1_bytes(&[0x00]),
            Err(ShineError::InvalidCurvePoint)
        );
    }

    #[test]
    fn scalar_mul_composes() {
        let g = CurvePoint::generator();
        let a = Scalar::from(6u64);
        let b = Scalar::from(7u64);
        assert_eq!(g.mul(&a).mul(&b), g.mul(&Scalar::from(42u64)));
    }
}
