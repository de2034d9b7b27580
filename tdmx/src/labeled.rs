//! Labeled matrix, vector, and series collaborators
//!
//! These carry zone identifiers alongside float32 storage and provide the
//! stack, unstack, and re-index operations the codecs are built on.

use hashbrown::HashMap;
use tdmx_core::{validation, Array, Shape, TdmxError};

use crate::error::{Error, Result};

/// Rank-1 values with one zone label per entry
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledVector {
    labels: Vec<i32>,
    values: Vec<f32>,
}

impl LabeledVector {
    /// Create a labeled vector, checking label cardinality
    pub fn new(labels: Vec<i32>, values: Vec<f32>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(TdmxError::LengthMismatch {
                len: labels.len(),
                expected: values.len(),
            }
            .into());
        }
        Ok(Self { labels, values })
    }

    /// Zone labels in storage order
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Values in storage order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rank-2 float32 values with zone labels on both axes
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    values: Array<f32>,
    row_labels: Vec<i32>,
    col_labels: Vec<i32>,
}

impl LabeledMatrix {
    /// Create a labeled matrix, checking label cardinality against the shape
    pub fn new(values: Array<f32>, row_labels: Vec<i32>, col_labels: Vec<i32>) -> Result<Self> {
        let (rows, cols) = match values.shape() {
            Shape::Matrix(rows, cols) => (rows, cols),
            Shape::Vector(_) => return Err(TdmxError::WrongRank { rank: 1 }.into()),
        };
        if row_labels.len() != rows {
            return Err(TdmxError::LengthMismatch {
                len: row_labels.len(),
                expected: rows,
            }
            .into());
        }
        if col_labels.len() != cols {
            return Err(TdmxError::LengthMismatch {
                len: col_labels.len(),
                expected: cols,
            }
            .into());
        }
        Ok(Self {
            values,
            row_labels,
            col_labels,
        })
    }

    /// Create a square labeled matrix with the same labels on both axes
    pub fn square(values: Array<f32>, labels: Vec<i32>) -> Result<Self> {
        let row_labels = labels.clone();
        Self::new(values, row_labels, labels)
    }

    pub fn rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Zone labels of the row axis
    pub fn row_labels(&self) -> &[i32] {
        &self.row_labels
    }

    /// Zone labels of the column axis
    pub fn col_labels(&self) -> &[i32] {
        &self.col_labels
    }

    /// Backing float32 storage
    pub fn values(&self) -> &Array<f32> {
        &self.values
    }

    /// Project to the backing storage, dropping the labels
    pub fn into_values(self) -> Array<f32> {
        self.values
    }

    /// Look up a value by zone label pair
    pub fn value_at(&self, row_label: i32, col_label: i32) -> Option<f32> {
        let row = self.row_labels.iter().position(|&l| l == row_label)?;
        let col = self.col_labels.iter().position(|&l| l == col_label)?;
        self.values.get(row, col)
    }

    /// Stack to a tall series with one (row, col) zone pair per value
    ///
    /// Pairs are emitted in row-major storage order.
    pub fn stack(&self) -> LabeledSeries {
        let len = self.values.len();
        let mut index = Vec::with_capacity(len);
        let mut values = Vec::with_capacity(len);
        let data = self.values.data();
        let cols = self.col_labels.len();
        for (row, &row_label) in self.row_labels.iter().enumerate() {
            let start = row * cols;
            for (col, &col_label) in self.col_labels.iter().enumerate() {
                index.push((row_label, col_label));
                values.push(data[start + col]);
            }
        }
        LabeledSeries { index, values }
    }

    /// Re-index the rows against a new label sequence
    ///
    /// Rows absent from `self` take `fill`; rows of `self` absent from
    /// `labels` are dropped.
    pub fn reindex_rows(&self, labels: &[i32], fill: f32) -> Result<LabeledMatrix> {
        let positions: HashMap<i32, usize> = self
            .row_labels
            .iter()
            .enumerate()
            .map(|(row, &label)| (label, row))
            .collect();
        let cols = self.cols();
        let mut data = vec![fill; labels.len() * cols];
        let source = self.values.data();
        for (row, label) in labels.iter().enumerate() {
            if let Some(&old_row) = positions.get(label) {
                data[row * cols..(row + 1) * cols]
                    .copy_from_slice(&source[old_row * cols..(old_row + 1) * cols]);
            }
        }
        LabeledMatrix::new(
            Array::from_vec(data, Shape::Matrix(labels.len(), cols))?,
            labels.to_vec(),
            self.col_labels.clone(),
        )
    }
}

/// Tall series keyed by a two-level (row, col) zone index
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    index: Vec<(i32, i32)>,
    values: Vec<f32>,
}

impl LabeledSeries {
    /// Create a series, checking index cardinality
    pub fn new(index: Vec<(i32, i32)>, values: Vec<f32>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(TdmxError::LengthMismatch {
                len: index.len(),
                expected: values.len(),
            }
            .into());
        }
        Ok(Self { index, values })
    }

    /// Zone pairs in storage order
    pub fn index(&self) -> &[(i32, i32)] {
        &self.index
    }

    /// Values in storage order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Unstack to a square labeled matrix
    ///
    /// The axis is the sorted union of both index levels, applied to rows
    /// and columns alike. Absent (row, col) combinations take `fill`; a
    /// repeated pair is an error.
    pub fn unstack(&self, fill: f32) -> Result<LabeledMatrix> {
        let mut axis: Vec<i32> = Vec::with_capacity(self.index.len() * 2);
        for &(row, col) in &self.index {
            axis.push(row);
            axis.push(col);
        }
        axis.sort_unstable();
        axis.dedup();

        let positions: HashMap<i32, usize> = axis
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, i))
            .collect();
        let side = axis.len();
        let cells = validation::checked_element_count(side, side)?;
        let mut data = vec![fill; cells];
        let mut filled = vec![false; cells];
        for (&(row, col), &value) in self.index.iter().zip(&self.values) {
            let (Some(&r), Some(&c)) = (positions.get(&row), positions.get(&col)) else {
                continue;
            };
            let cell = r * side + c;
            if filled[cell] {
                return Err(Error::DuplicateIndex { row, col });
            }
            filled[cell] = true;
            data[cell] = value;
        }
        LabeledMatrix::new(
            Array::from_vec(data, Shape::Matrix(side, side))?,
            axis.clone(),
            axis,
        )
    }
}
