//! Input normalization shared by every encoder

use tdmx_core::{Array, DynArray, Shape, TdmxError};

use crate::error::{Error, Result};
use crate::labeled::{LabeledMatrix, LabeledSeries};

/// Any value an encoder accepts
///
/// Encoders resolve their input representation once, at entry, by
/// converting into this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSource {
    /// Labeled rank-2 table
    Matrix(LabeledMatrix),
    /// Tall series keyed by zone pairs
    Series(LabeledSeries),
    /// Raw storage without labels
    Raw(DynArray),
}

impl From<LabeledMatrix> for MatrixSource {
    fn from(matrix: LabeledMatrix) -> Self {
        MatrixSource::Matrix(matrix)
    }
}

impl From<LabeledSeries> for MatrixSource {
    fn from(series: LabeledSeries) -> Self {
        MatrixSource::Series(series)
    }
}

impl From<DynArray> for MatrixSource {
    fn from(array: DynArray) -> Self {
        MatrixSource::Raw(array)
    }
}

impl From<Array<f32>> for MatrixSource {
    fn from(array: Array<f32>) -> Self {
        MatrixSource::Raw(DynArray::F32(array))
    }
}

/// Normalize encoder input to a flat float32 rank-2 buffer
///
/// A labeled table passes its storage through; under `force_square` its
/// row labels must equal its column labels, order included. A series is
/// unstacked over the union of its index levels with absent cells at 0.0,
/// which is square by construction. A raw buffer is admitted only when
/// `allow_raw` is set, must be rank 2, and under `force_square` must have
/// equal extents. Integer and float64 storage converts to float32.
pub fn coerce_matrix<M: Into<MatrixSource>>(
    matrix: M,
    allow_raw: bool,
    force_square: bool,
) -> Result<Array<f32>> {
    match matrix.into() {
        MatrixSource::Matrix(matrix) => {
            if force_square && matrix.row_labels() != matrix.col_labels() {
                return Err(Error::LabelsNotSquare);
            }
            Ok(matrix.into_values())
        }
        MatrixSource::Series(series) => Ok(series.unstack(0.0)?.into_values()),
        MatrixSource::Raw(array) => {
            if !allow_raw {
                return Err(Error::LabelsRequired);
            }
            let array = array.into_f32();
            match array.shape() {
                Shape::Matrix(rows, cols) => {
                    if force_square && rows != cols {
                        return Err(TdmxError::NotSquare { rows, cols }.into());
                    }
                    Ok(array)
                }
                Shape::Vector(_) => Err(TdmxError::WrongRank { rank: 1 }.into()),
            }
        }
    }
}

/// Normalize encoder input to a labeled table
///
/// Used where labels end up on the wire; raw buffers are rejected.
pub fn coerce_labeled<M: Into<MatrixSource>>(matrix: M) -> Result<LabeledMatrix> {
    match matrix.into() {
        MatrixSource::Matrix(matrix) => Ok(matrix),
        MatrixSource::Series(series) => series.unstack(0.0),
        MatrixSource::Raw(_) => Err(Error::LabelsRequired),
    }
}
