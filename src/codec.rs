//! # Point Codec
//!
//! Maps short byte strings to secp256k1 points and back.
//!
//! A 32-byte frame `random prefix ‖ payload` is scrambled by the keyed
//! [`BlockPermutation`]; the result is read as a big-endian candidate `x`. With
//! `P ≡ 3 (mod 4)`, `y = (x³ + 7)^((P+1)/4)` is a square root whenever one exists,
//! so the candidate either lifts to a point or fails curve validation. Failures
//! resample the prefix. About half of all candidates lift, so the expected cost is
//! two attempts; the loop is capped by [`CodecConfig::max_attempts`].
//!
//! Decoding reads `x`, inverts the permutation and returns the frame. The prefix
//! is discarded by callers.
//!
//! [`PointCodec::encode_leading`] flips the layout to `payload ‖ random filler`;
//! the bulk header uses it so the nonce opens the frame.

use crate::aliases::{Frame32, Iv16, PermutationKey, SpanBuffer};
use crate::builders::codec_config::CodecConfig;
use crate::consts::{CURVE_B, FRAME_LEN, SQRT_EXPONENT};
use crate::crypto::prp::BlockPermutation;
use crate::crypto::rng::fill_random;
use crate::curve::{field_bytes_to_array, CurvePoint};
use crate::error::ShineError;
use k256::elliptic_curve::Field;
use k256::{FieldBytes, FieldElement};

/// Rejection-sampling encoder bound to one permutation key.
///
/// # Thread Safety
///
/// `Send + Sync`; every call draws its own randomness, so one codec can serve
/// parallel block encoding.
#[derive(Debug, Clone)]
pub struct PointCodec {
    prp: BlockPermutation,
    max_attempts: u32,
}

impl PointCodec {
    pub fn new(key: &PermutationKey, config: &CodecConfig) -> Self {
        Self {
            prp: BlockPermutation::new(key),
            max_attempts: config.max_attempts(),
        }
    }

    /// Embed `payload` (at most 32 bytes) into a curve point.
    ///
    /// The remaining `32 - payload.len()` leading bytes are fresh randomness on
    /// every attempt, so two encodings of the same payload differ.
    pub fn encode(&self, payload: &[u8], iv: &Iv16) -> Result<CurvePoint, ShineError> {
        let at = FRAME_LEN.saturating_sub(payload.len());
        self.embed(payload, at, iv)
    }

    /// Embed `payload` at the start of the frame, followed by random filler.
    pub fn encode_leading(&self, payload: &[u8], iv: &Iv16) -> Result<CurvePoint, ShineError> {
        self.embed(payload, 0, iv)
    }

    fn embed(&self, payload: &[u8], at: usize, iv: &Iv16) -> Result<CurvePoint, ShineError> {
        if payload.len() > FRAME_LEN {
            return Err(ShineError::OversizedInput {
                len: payload.len(),
                max: FRAME_LEN,
            });
        }
        let end = at + payload.len();

        let mut frame = Frame32::new([0u8; FRAME_LEN]);
        frame.expose_secret_mut()[at..end].copy_from_slice(payload);
        let mut candidate = Frame32::new([0u8; FRAME_LEN]);

        for attempt in 1..=self.max_attempts {
            let bytes = frame.expose_secret_mut();
            fill_random(&mut bytes[..at])?;
            fill_random(&mut bytes[end..])?;
            self.prp.permute(iv, &frame, &mut candidate);

            match lift_x(candidate.expose_secret()) {
                Ok(point) => {
                    tracing::trace!(attempt, "embedded payload");
                    return Ok(point);
                }
                Err(ShineError::InvalidCurvePoint) => {
                    tracing::debug!(attempt, "candidate x has no curve point; resampling");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(attempts = self.max_attempts, "point encoding retry cap reached");
        Err(ShineError::EncodeRetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Recover the full 32-byte frame embedded in `point`.
    pub fn decode_frame(&self, point: &CurvePoint, iv: &Iv16) -> Frame32 {
        let x = Frame32::new(point.x_bytes());
        let mut frame = Frame32::new([0u8; FRAME_LEN]);
        self.prp.invert(iv, &x, &mut frame);
        frame
    }

    /// Recover the trailing `N`-byte payload, dropping the random prefix.
    pub fn decode<const N: usize>(&self, point: &CurvePoint, iv: &Iv16) -> SpanBuffer<N> {
        const { assert!(N <= FRAME_LEN, "payload wider than the frame") };
        self.extract::<N>(point, iv, FRAME_LEN - N)
    }

    /// Recover the leading `N`-byte payload written by [`Self::encode_leading`].
    pub fn decode_leading<const N: usize>(&self, point: &CurvePoint, iv: &Iv16) -> SpanBuffer<N> {
        const { assert!(N <= FRAME_LEN, "payload wider than the frame") };
        self.extract::<N>(point, iv, 0)
    }

    fn extract<const N: usize>(&self, point: &CurvePoint, iv: &Iv16, at: usize) -> SpanBuffer<N> {
        let frame = self.decode_frame(point, iv);
        let mut payload = SpanBuffer::<N>::new([0u8; N]);
        payload
            .expose_secret_mut()
            .copy_from_slice(&frame.expose_secret()[at..at + N]);
        payload
    }
}

/// Lift a big-endian x-coordinate to the point with the principal square root as `y`.
fn lift_x(x_bytes: &[u8; FRAME_LEN]) -> Result<CurvePoint, ShineError> {
    let x: Option<FieldElement> = FieldElement::from_bytes(&FieldBytes::from(*x_bytes)).into();
    let x = x.ok_or(ShineError::InvalidCurvePoint)?;

    let rhs = x.square() * &x + &FieldElement::from(CURVE_B);
    let y = <FieldElement as Field>::pow_vartime(&rhs, SQRT_EXPONENT);

    CurvePoint::from_coordinates(x_bytes, &field_bytes_to_array(&y.to_bytes()))
}
