//! Row-indexed float matrix codec
//!
//! Every row opens with a one-based row index whose int32 bit pattern
//! sits reinterpreted in a float32 word, followed by the row's values.
//! The square layout is n rows of n+1 words and its extent is recovered
//! from the stream length; the rectangular layout carries rows of a
//! width only the caller knows.

use std::io::{Read, Write};

use tdmx_core::validation;
use tdmx_core::{Array, DynArray, Shape, TdmxError};

use crate::coerce::{coerce_matrix, MatrixSource};
use crate::error::{Error, Result};
use crate::labeled::LabeledMatrix;
use crate::matrix::{subset_square, MatrixData, Zones};
use crate::stream::{read_remaining_f32s, write_elements};

/// Decode options for the rectangular layout
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleOptions {
    /// Zone subset applied after decoding
    pub zones: Option<Zones>,
    /// Emit a series keyed by zone pairs instead of a table
    pub tall: bool,
    /// Reorder rows so their labels follow the zone label order
    pub reindex_rows: bool,
    /// Value for rows absent from the stream when reindexing
    pub fill_value: f32,
}

impl RectangleOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zone subset
    pub fn with_zones<Z: Into<Zones>>(mut self, zones: Z) -> Self {
        self.zones = Some(zones.into());
        self
    }

    /// Emit a series keyed by zone pairs
    pub fn with_tall(mut self, tall: bool) -> Self {
        self.tall = tall;
        self
    }

    /// Reorder rows by their stored indices
    pub fn with_reindex_rows(mut self, reindex: bool) -> Self {
        self.reindex_rows = reindex;
        self
    }

    /// Set the fill for rows absent from the stream
    pub fn with_fill_value(mut self, fill: f32) -> Self {
        self.fill_value = fill;
        self
    }
}

/// Decode the square layout
///
/// The word count must factor as n rows of n+1 words. Stored row
/// indices are discarded; rows keep their stream order.
pub fn from_fortran_square<R: Read>(
    reader: &mut R,
    zones: Option<Zones>,
    tall: bool,
) -> Result<MatrixData> {
    let words = read_remaining_f32s(reader)?;
    let rows = validation::infer_indexed_rows(words.len())?;
    let width = rows + 1;
    let mut values = Vec::with_capacity(rows * rows);
    for row in words.chunks_exact(width) {
        values.extend_from_slice(&row[1..]);
    }
    let matrix = Array::from_vec(values, Shape::Matrix(rows, rows))?;
    subset_square(matrix, zones, tall)
}

/// Decode the rectangular layout
///
/// The caller supplies the row width; the stream carries no record of
/// it. Stored row indices are reduced to zero-based positions and, when
/// zone labels are given, pick each row's label. A stream holding fewer
/// rows than labels keeps the shorter row axis; reindexing fills the
/// missing rows.
pub fn from_fortran_rectangle<R: Read>(
    reader: &mut R,
    n_columns: usize,
    options: RectangleOptions,
) -> Result<MatrixData> {
    if n_columns == 0 {
        return Err(TdmxError::ZeroDimension.into());
    }
    let words = read_remaining_f32s(reader)?;
    let width = n_columns + 1;
    if words.len() % width != 0 {
        return Err(TdmxError::RaggedRows {
            elements: words.len(),
            row_width: width,
        }
        .into());
    }
    let rows = words.len() / width;
    let mut row_index = Vec::with_capacity(rows);
    let mut values = Vec::with_capacity(rows * n_columns);
    for row in words.chunks_exact(width) {
        // i64 keeps i32::MIN representable after the one-based shift
        row_index.push(row[0].to_bits() as i32 as i64 - 1);
        values.extend_from_slice(&row[1..]);
    }
    let matrix = Array::from_vec(values, Shape::Matrix(rows, n_columns))?;

    match options.zones {
        None => {
            let array = if options.tall { matrix.flatten() } else { matrix };
            Ok(MatrixData::Raw(DynArray::F32(array)))
        }
        Some(Zones::Count(count)) => {
            let block = matrix.leading_block(count, count)?;
            let array = if options.tall { block.flatten() } else { block };
            Ok(MatrixData::Raw(DynArray::F32(array)))
        }
        Some(Zones::Labels(labels)) => {
            // only the row width binds; a stream may hold fewer rows than labels
            if labels.len() > n_columns {
                return Err(Error::ZonesExceedMatrix {
                    requested: labels.len(),
                    available: n_columns,
                });
            }
            let side = labels.len();
            let block = matrix.leading_block(side, side)?;
            let mut row_labels = Vec::with_capacity(side);
            for &stored in row_index.iter().take(side) {
                if stored < 0 || stored >= side as i64 {
                    return Err(TdmxError::IndexOutOfBounds {
                        index: stored,
                        bound: side,
                    }
                    .into());
                }
                row_labels.push(labels[stored as usize]);
            }
            let mut labeled = LabeledMatrix::new(block, row_labels, labels.clone())?;
            if options.reindex_rows {
                labeled = labeled.reindex_rows(&labels, options.fill_value)?;
            }
            Ok(if options.tall {
                MatrixData::Series(labeled.stack())
            } else {
                MatrixData::Matrix(labeled)
            })
        }
    }
}

/// Encode rows behind leading one-based index words
///
/// Row ordinals count up from `min_index` and each int32 ordinal is
/// stored bit-reinterpreted as a float32 word. `force_square` requires
/// equal extents on unlabeled input and matching labels on labeled
/// input.
pub fn to_fortran<M: Into<MatrixSource>, W: Write>(
    matrix: M,
    writer: &mut W,
    force_square: bool,
    min_index: i32,
) -> Result<()> {
    let values = coerce_matrix(matrix, true, force_square)?;
    let Shape::Matrix(rows, cols) = values.shape() else {
        return Err(TdmxError::WrongRank { rank: 1 }.into());
    };
    if rows > 0 && min_index as i64 + rows as i64 - 1 > i32::MAX as i64 {
        return Err(TdmxError::SizeOverflow.into());
    }
    let data = values.data();
    let mut row = Vec::with_capacity(cols + 1);
    let mut ordinal = min_index;
    for r in 0..rows {
        row.clear();
        row.push(f32::from_bits(ordinal as u32));
        row.extend_from_slice(&data[r * cols..(r + 1) * cols]);
        write_elements(writer, &row)?;
        ordinal = ordinal.wrapping_add(1);
    }
    Ok(())
}
