//! Headerless square matrix codec
//!
//! A stream in this format is nothing but n*n float32 words for some n.
//! The extent is never written; readers recover it from the word count
//! and writers hold it fixed, cutting or padding the input to fit.

use std::io::{Read, Write};

use tdmx_core::validation;
use tdmx_core::{Array, Shape, TdmxError};

use crate::coerce::{coerce_matrix, MatrixSource};
use crate::error::Result;
use crate::matrix::{subset_square, MatrixData, Zones};
use crate::stream::{read_remaining_f32s, write_elements};

/// Decode a headerless square matrix stream
///
/// The extent is the integer square root of the word count; any other
/// length is rejected. `zones` selects the leading block and `tall`
/// flattens the result.
pub fn from_emx<R: Read>(reader: &mut R, zones: Option<Zones>, tall: bool) -> Result<MatrixData> {
    let words = read_remaining_f32s(reader)?;
    let side = validation::infer_square_side(words.len())?;
    let matrix = Array::vector(words).reshape(Shape::Matrix(side, side))?;
    subset_square(matrix, zones, tall)
}

/// Encode a square matrix at a fixed extent
///
/// Output is always `target_dimension` squared words: larger input is
/// cut to its leading block and smaller input is padded with zeros.
/// Unlabeled buffers are accepted but must already be square.
pub fn to_emx<M: Into<MatrixSource>, W: Write>(
    matrix: M,
    writer: &mut W,
    target_dimension: usize,
) -> Result<()> {
    if target_dimension == 0 {
        return Err(TdmxError::ZeroDimension.into());
    }
    validation::checked_element_count(target_dimension, target_dimension)?;
    let values = coerce_matrix(matrix, true, true)?;
    let Shape::Matrix(rows, _) = values.shape() else {
        return Err(TdmxError::WrongRank { rank: 1 }.into());
    };
    let sized = if rows >= target_dimension {
        values.leading_block(target_dimension, target_dimension)?
    } else {
        values.expand(target_dimension - rows, None)?
    };
    write_elements(writer, sized.data())?;
    Ok(())
}
