//! src/bulk/ciphertext.rs
//! Ordered OCBSHINE ciphertext: data points, then the nonce header

use crate::consts::{BULK_MAX_BLOCKS, SEC1_UNCOMPRESSED_LEN, SEC1_UNCOMPRESSED_TAG};
use crate::curve::CurvePoint;
use crate::error::ShineError;
use std::iter;

/// A bulk ciphertext of `block_count + 1` points with the header last.
///
/// Holds between 1 and 256 data blocks; every constructor enforces that shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCiphertext {
    blocks: Vec<CurvePoint>,
    header: CurvePoint,
}

impl BulkCiphertext {
    pub(crate) fn from_parts(blocks: Vec<CurvePoint>, header: CurvePoint) -> Self {
        debug_assert!(check_block_count(blocks.len()).is_ok());
        Self { blocks, header }
    }

    /// Rebuild from points in wire order (data blocks, then header).
    pub fn from_points(mut points: Vec<CurvePoint>) -> Result<Self, ShineError> {
        let Some(header) = points.pop() else {
            return Err(ShineError::MalformedCiphertext("empty ciphertext".into()));
        };
        check_block_count(points.len())?;
        Ok(Self {
            blocks: points,
            header,
        })
    }

    /// Parse concatenated 65-byte uncompressed SEC1 points in wire order.
    ///
    /// Compressed entries are refused, so a flipped byte in any coordinate of any
    /// point surfaces here as [`ShineError::MalformedCiphertext`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ShineError> {
        if bytes.len() % SEC1_UNCOMPRESSED_LEN != 0 {
            return Err(ShineError::MalformedCiphertext(format!(
                "{} bytes is not a whole number of {SEC1_UNCOMPRESSED_LEN}-byte points",
                bytes.len()
            )));
        }
        let count = bytes.len() / SEC1_UNCOMPRESSED_LEN;
        if count > BULK_MAX_BLOCKS + 1 {
            return Err(ShineError::MalformedCiphertext(format!(
                "{count} points exceeds {}",
                BULK_MAX_BLOCKS + 1
            )));
        }

        let points = bytes
            .chunks_exact(SEC1_UNCOMPRESSED_LEN)
            .enumerate()
            .map(|(index, encoded)| {
                if encoded[0] != SEC1_UNCOMPRESSED_TAG {
                    return Err(ShineError::MalformedCiphertext(format!(
                        "point {index} has tag {:#04x}, expected {SEC1_UNCOMPRESSED_TAG:#04x}",
                        encoded[0]
                    )));
                }
                CurvePoint::from_sec1_bytes(encoded).map_err(|_| {
                    ShineError::MalformedCiphertext(format!("point {index} is not on the curve"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_points(points)
    }

    /// Concatenated uncompressed SEC1 encodings in wire order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.point_count() * SEC1_UNCOMPRESSED_LEN);
        for point in self.points() {
            out.extend_from_slice(&point.to_sec1_bytes());
        }
        out
    }

    /// The nonce header, always the final point.
    pub fn header(&self) -> &CurvePoint {
        &self.header
    }

    pub fn blocks(&self) -> &[CurvePoint] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Always `block_count() + 1`.
    pub fn point_count(&self) -> usize {
        self.blocks.len() + 1
    }

    /// Points in wire order.
    pub fn points(&self) -> impl Iterator<Item = &CurvePoint> {
        self.blocks.iter().chain(iter::once(&self.header))
    }

    pub fn into_points(mut self) -> Vec<CurvePoint> {
        self.blocks.push(self.header);
        self.blocks
    }

    pub(crate) fn map_points(&self, f: impl Fn(&CurvePoint) -> CurvePoint) -> Self {
        Self {
            blocks: self.blocks.iter().map(&f).collect(),
            header: f(&self.header),
        }
    }
}

pub(crate) fn check_block_count(count: usize) -> Result<(), ShineError> {
    if count == 0 {
        return Err(ShineError::MalformedCiphertext("missing data blocks".into()));
    }
    if count > BULK_MAX_BLOCKS {
        return Err(ShineError::MalformedCiphertext(format!(
            "{count} data blocks exceeds {BULK_MAX_BLOCKS}"
        )));
    }
    Ok(())
}
