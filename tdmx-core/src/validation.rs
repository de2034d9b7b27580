//! Dimension inference and size validation
//!
//! This module contains pure mathematical functions with no I/O
//! dependencies. Codecs call these before trusting any size derived from a
//! byte stream.

use crate::error::{Result, TdmxError};

/// Infer the side of a square matrix from its element count
///
/// The untagged square layouts carry no shape metadata; the side is the
/// exact integer square root of the element count.
pub const fn infer_square_side(elements: usize) -> Result<usize> {
    let side = elements.isqrt();
    if side * side == elements {
        Ok(side)
    } else {
        Err(TdmxError::NonSquareLength { elements })
    }
}

/// Infer the row count of an index-prefixed square layout
///
/// Each stored row carries one leading index word ahead of `rows` data
/// words, so the element count must solve `rows * (rows + 1)`.
pub const fn infer_indexed_rows(elements: usize) -> Result<usize> {
    let rows = elements.isqrt();
    if rows * (rows + 1) == elements {
        Ok(rows)
    } else {
        Err(TdmxError::NonIndexedLength { elements })
    }
}

/// Multiply matrix extents with overflow protection
pub const fn checked_element_count(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(count) => Ok(count),
        None => Err(TdmxError::SizeOverflow),
    }
}

/// Compute a payload byte size with overflow protection
pub const fn checked_byte_size(elements: usize, element_size: usize) -> Result<usize> {
    match elements.checked_mul(element_size) {
        Some(bytes) => Ok(bytes),
        None => Err(TdmxError::SizeOverflow),
    }
}
