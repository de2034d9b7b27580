//! Decoded matrix payloads and zone subset selection

use tdmx_core::{Array, DynArray, Shape, TdmxError};

use crate::error::{Error, Result};
use crate::labeled::{LabeledMatrix, LabeledSeries, LabeledVector};

/// Decoded payload in whichever representation the caller asked for
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixData {
    /// Unlabeled storage with the element type preserved
    Raw(DynArray),
    /// Rank-1 values with zone labels
    Vector(LabeledVector),
    /// Rank-2 values with zone labels on both axes
    Matrix(LabeledMatrix),
    /// Tall values keyed by zone pairs
    Series(LabeledSeries),
}

impl MatrixData {
    pub fn as_raw(&self) -> Option<&DynArray> {
        match self {
            MatrixData::Raw(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&LabeledVector> {
        match self {
            MatrixData::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&LabeledMatrix> {
        match self {
            MatrixData::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn as_series(&self) -> Option<&LabeledSeries> {
        match self {
            MatrixData::Series(series) => Some(series),
            _ => None,
        }
    }

    pub fn into_raw(self) -> Option<DynArray> {
        match self {
            MatrixData::Raw(array) => Some(array),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<LabeledVector> {
        match self {
            MatrixData::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<LabeledMatrix> {
        match self {
            MatrixData::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_series(self) -> Option<LabeledSeries> {
        match self {
            MatrixData::Series(series) => Some(series),
            _ => None,
        }
    }
}

/// Zone subset selector for the square layouts
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zones {
    /// Keep the leading block of this many zones, without labels
    Count(usize),
    /// Keep one zone per label and attach the labels to both axes
    Labels(Vec<i32>),
}

impl From<usize> for Zones {
    fn from(count: usize) -> Self {
        Zones::Count(count)
    }
}

impl From<Vec<i32>> for Zones {
    fn from(labels: Vec<i32>) -> Self {
        Zones::Labels(labels)
    }
}

impl From<&[i32]> for Zones {
    fn from(labels: &[i32]) -> Self {
        Zones::Labels(labels.to_vec())
    }
}

/// Apply a zone subset to a decoded square matrix
///
/// `Count` follows slice semantics and clamps to the decoded extent;
/// `Labels` must fit inside it.
pub(crate) fn subset_square(
    matrix: Array<f32>,
    zones: Option<Zones>,
    tall: bool,
) -> Result<MatrixData> {
    match zones {
        None => {
            let array = if tall { matrix.flatten() } else { matrix };
            Ok(MatrixData::Raw(DynArray::F32(array)))
        }
        Some(Zones::Count(count)) => {
            let block = matrix.leading_block(count, count)?;
            let array = if tall { block.flatten() } else { block };
            Ok(MatrixData::Raw(DynArray::F32(array)))
        }
        Some(Zones::Labels(labels)) => {
            let available = match matrix.shape() {
                Shape::Matrix(rows, _) => rows,
                Shape::Vector(_) => return Err(TdmxError::WrongRank { rank: 1 }.into()),
            };
            if labels.len() > available {
                return Err(Error::ZonesExceedMatrix {
                    requested: labels.len(),
                    available,
                });
            }
            let block = matrix.leading_block(labels.len(), labels.len())?;
            let labeled = LabeledMatrix::square(block, labels)?;
            Ok(if tall {
                MatrixData::Series(labeled.stack())
            } else {
                MatrixData::Matrix(labeled)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square4() -> Array<f32> {
        let data = (1..=16).map(|v| v as f32).collect();
        Array::from_vec(data, Shape::Matrix(4, 4)).unwrap()
    }

    #[test]
    fn test_count_clamps_like_a_slice() {
        let data = subset_square(square4(), Some(Zones::Count(99)), false).unwrap();
        let raw = data.into_raw().unwrap();
        assert_eq!(raw.shape(), Shape::Matrix(4, 4));
    }

    #[test]
    fn test_count_takes_leading_block() {
        let data = subset_square(square4(), Some(Zones::Count(2)), false).unwrap();
        let raw = data.into_raw().unwrap().into_f32();
        assert_eq!(raw.data(), &[1.0, 2.0, 5.0, 6.0]);
    }

    #[test]
    fn test_labels_must_fit() {
        let err = subset_square(square4(), Some(Zones::Labels(vec![1, 2, 3, 4, 5])), false)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ZonesExceedMatrix {
                requested: 5,
                available: 4
            }
        ));
    }

    #[test]
    fn test_labels_attach_to_both_axes() {
        let data = subset_square(square4(), Some(Zones::Labels(vec![7, 8])), false).unwrap();
        let matrix = data.into_matrix().unwrap();
        assert_eq!(matrix.row_labels(), &[7, 8]);
        assert_eq!(matrix.col_labels(), &[7, 8]);
        assert_eq!(matrix.value_at(8, 7), Some(5.0));
    }

    #[test]
    fn test_tall_without_labels_flattens() {
        let data = subset_square(square4(), None, true).unwrap();
        assert_eq!(data.into_raw().unwrap().shape(), Shape::Vector(16));
    }

    #[test]
    fn test_borrow_accessors_discriminate() {
        let raw = subset_square(square4(), None, false).unwrap();
        assert!(raw.as_raw().is_some());
        assert!(raw.as_matrix().is_none());
        assert!(raw.as_vector().is_none());

        let wide = subset_square(square4(), Some(Zones::Labels(vec![7, 8])), false).unwrap();
        assert_eq!(wide.as_matrix().unwrap().rows(), 2);
        assert!(wide.as_series().is_none());

        let tall = subset_square(square4(), Some(Zones::Labels(vec![7, 8])), true).unwrap();
        assert_eq!(tall.as_series().unwrap().len(), 4);
    }
}
