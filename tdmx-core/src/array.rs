//! Owned dense array storage with rank-1 and rank-2 shapes
//!
//! Codecs decode into these buffers and encoders consume them. Rank-2 data
//! is row-major throughout.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Result, TdmxError};
use crate::format::DataType;
use crate::traits::MatrixElement;

/// Shape of a dense buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Rank-1 layout with a single extent
    Vector(usize),
    /// Rank-2 row-major layout as (rows, cols)
    Matrix(usize, usize),
}

impl Shape {
    /// Total number of elements
    pub const fn len(&self) -> usize {
        match self {
            Shape::Vector(len) => *len,
            Shape::Matrix(rows, cols) => *rows * *cols,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of axes (1 or 2)
    pub const fn rank(&self) -> usize {
        match self {
            Shape::Vector(_) => 1,
            Shape::Matrix(_, _) => 2,
        }
    }

    /// Extent of one axis, if it exists
    pub const fn dim(&self, axis: usize) -> Option<usize> {
        match (self, axis) {
            (Shape::Vector(len), 0) => Some(*len),
            (Shape::Matrix(rows, _), 0) => Some(*rows),
            (Shape::Matrix(_, cols), 1) => Some(*cols),
            _ => None,
        }
    }
}

/// Owned dense buffer of matrix elements
///
/// Invariant: `data.len() == shape.len()`, enforced by every constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T: MatrixElement> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: MatrixElement> Array<T> {
    /// Wrap a buffer as a rank-1 array
    pub fn vector(data: Vec<T>) -> Self {
        let shape = Shape::Vector(data.len());
        Self { data, shape }
    }

    /// Wrap a buffer with an explicit shape, checking cardinality
    pub fn from_vec(data: Vec<T>, shape: Shape) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(TdmxError::LengthMismatch {
                len: data.len(),
                expected: shape.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Allocate a zero-filled array
    pub fn zeros(shape: Shape) -> Self {
        Self {
            data: vec![T::zeroed(); shape.len()],
            shape,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in storage order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Take the backing buffer, dropping the shape
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at a rank-2 position
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        match self.shape {
            Shape::Matrix(rows, cols) if row < rows && col < cols => {
                Some(self.data[row * cols + col])
            }
            _ => None,
        }
    }

    /// One row of a rank-2 array
    pub fn row(&self, row: usize) -> Option<&[T]> {
        match self.shape {
            Shape::Matrix(rows, cols) if row < rows => {
                Some(&self.data[row * cols..(row + 1) * cols])
            }
            _ => None,
        }
    }

    /// Reinterpret the buffer under a new shape of the same cardinality
    pub fn reshape(self, shape: Shape) -> Result<Self> {
        Self::from_vec(self.data, shape)
    }

    /// Collapse to rank 1 in storage order
    pub fn flatten(self) -> Self {
        let shape = Shape::Vector(self.data.len());
        Self {
            data: self.data,
            shape,
        }
    }

    /// Grow the array by `n` along one axis, or along every axis
    ///
    /// The original data lands in the leading block of a zero-filled buffer.
    pub fn expand(&self, n: usize, axis: Option<usize>) -> Result<Self> {
        match self.shape {
            Shape::Vector(len) => {
                match axis {
                    None | Some(0) => {}
                    Some(axis) => return Err(TdmxError::InvalidAxis { axis, rank: 1 }),
                }
                let mut out = Self::zeros(Shape::Vector(len + n));
                out.data[..len].copy_from_slice(&self.data);
                Ok(out)
            }
            Shape::Matrix(rows, cols) => {
                let (out_rows, out_cols) = match axis {
                    None => (rows + n, cols + n),
                    Some(0) => (rows + n, cols),
                    Some(1) => (rows, cols + n),
                    Some(axis) => return Err(TdmxError::InvalidAxis { axis, rank: 2 }),
                };
                let mut out = Self::zeros(Shape::Matrix(out_rows, out_cols));
                for row in 0..rows {
                    out.data[row * out_cols..row * out_cols + cols]
                        .copy_from_slice(&self.data[row * cols..(row + 1) * cols]);
                }
                Ok(out)
            }
        }
    }

    /// Copy the leading block of a rank-2 array, clamping to its extents
    pub fn leading_block(&self, rows: usize, cols: usize) -> Result<Self> {
        match self.shape {
            Shape::Matrix(have_rows, have_cols) => {
                let rows = rows.min(have_rows);
                let cols = cols.min(have_cols);
                let mut data = Vec::with_capacity(rows * cols);
                for row in 0..rows {
                    data.extend_from_slice(&self.data[row * have_cols..row * have_cols + cols]);
                }
                Ok(Self {
                    data,
                    shape: Shape::Matrix(rows, cols),
                })
            }
            Shape::Vector(_) => Err(TdmxError::WrongRank { rank: 1 }),
        }
    }
}

/// Dense buffer with a runtime element type
///
/// Decoders that must honor the element tag of a tagged record dispatch
/// through this instead of a generic parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DynArray {
    F32(Array<f32>),
    F64(Array<f64>),
    I32(Array<i32>),
    U32(Array<u32>),
}

impl DynArray {
    /// Wire tag of the stored elements
    pub fn data_type(&self) -> DataType {
        match self {
            DynArray::F32(_) => DataType::F32,
            DynArray::F64(_) => DataType::F64,
            DynArray::I32(_) => DataType::I32,
            DynArray::U32(_) => DataType::U32,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            DynArray::F32(array) => array.shape(),
            DynArray::F64(array) => array.shape(),
            DynArray::I32(array) => array.shape(),
            DynArray::U32(array) => array.shape(),
        }
    }

    pub fn len(&self) -> usize {
        self.shape().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rank(&self) -> usize {
        self.shape().rank()
    }

    /// Reinterpret under a new shape of the same cardinality
    pub fn reshape(self, shape: Shape) -> Result<Self> {
        Ok(match self {
            DynArray::F32(array) => DynArray::F32(array.reshape(shape)?),
            DynArray::F64(array) => DynArray::F64(array.reshape(shape)?),
            DynArray::I32(array) => DynArray::I32(array.reshape(shape)?),
            DynArray::U32(array) => DynArray::U32(array.reshape(shape)?),
        })
    }

    /// Collapse to rank 1 in storage order
    pub fn flatten(self) -> Self {
        match self {
            DynArray::F32(array) => DynArray::F32(array.flatten()),
            DynArray::F64(array) => DynArray::F64(array.flatten()),
            DynArray::I32(array) => DynArray::I32(array.flatten()),
            DynArray::U32(array) => DynArray::U32(array.flatten()),
        }
    }

    /// Convert the storage to float32, preserving the shape
    pub fn into_f32(self) -> Array<f32> {
        match self {
            DynArray::F32(array) => array,
            DynArray::F64(array) => cast_f32(array),
            DynArray::I32(array) => cast_f32(array),
            DynArray::U32(array) => cast_f32(array),
        }
    }
}

impl From<Array<f32>> for DynArray {
    fn from(array: Array<f32>) -> Self {
        DynArray::F32(array)
    }
}

impl From<Array<f64>> for DynArray {
    fn from(array: Array<f64>) -> Self {
        DynArray::F64(array)
    }
}

impl From<Array<i32>> for DynArray {
    fn from(array: Array<i32>) -> Self {
        DynArray::I32(array)
    }
}

impl From<Array<u32>> for DynArray {
    fn from(array: Array<u32>) -> Self {
        DynArray::U32(array)
    }
}

fn cast_f32<T: MatrixElement>(array: Array<T>) -> Array<f32> {
    let shape = array.shape();
    let data = array
        .into_vec()
        .into_iter()
        .map(|value| value.to_f64() as f32)
        .collect();
    Array { data, shape }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square3() -> Array<f32> {
        Array::from_vec(
            alloc::vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            Shape::Matrix(3, 3),
        )
        .unwrap()
    }

    #[test]
    fn test_shape_accessors() {
        assert_eq!(Shape::Vector(4).len(), 4);
        assert_eq!(Shape::Matrix(3, 5).len(), 15);
        assert_eq!(Shape::Matrix(3, 5).rank(), 2);
        assert_eq!(Shape::Matrix(3, 5).dim(1), Some(5));
        assert_eq!(Shape::Matrix(3, 5).dim(2), None);
        assert!(Shape::Vector(0).is_empty());
    }

    #[test]
    fn test_from_vec_checks_cardinality() {
        let result = Array::from_vec(alloc::vec![1.0f32, 2.0], Shape::Matrix(2, 2));
        assert_eq!(
            result,
            Err(TdmxError::LengthMismatch {
                len: 2,
                expected: 4
            })
        );
    }

    #[test]
    fn test_get_and_row() {
        let array = square3();
        assert_eq!(array.get(1, 2), Some(6.0));
        assert_eq!(array.get(3, 0), None);
        assert_eq!(array.row(2), Some(&[7.0f32, 8.0, 9.0][..]));
        assert_eq!(array.row(3), None);
    }

    #[test]
    fn test_expand_all_axes() {
        let grown = square3().expand(2, None).unwrap();
        assert_eq!(grown.shape(), Shape::Matrix(5, 5));
        assert_eq!(grown.get(2, 2), Some(9.0));
        assert_eq!(grown.get(2, 3), Some(0.0));
        assert_eq!(grown.get(4, 4), Some(0.0));
    }

    #[test]
    fn test_expand_single_axis() {
        let grown = square3().expand(2, Some(0)).unwrap();
        assert_eq!(grown.shape(), Shape::Matrix(5, 3));
        assert_eq!(grown.get(0, 0), Some(1.0));
        assert_eq!(grown.get(4, 2), Some(0.0));
    }

    #[test]
    fn test_expand_rejects_bad_axis() {
        assert_eq!(
            square3().expand(1, Some(2)),
            Err(TdmxError::InvalidAxis { axis: 2, rank: 2 })
        );
        assert_eq!(
            Array::vector(alloc::vec![1.0f32]).expand(1, Some(1)),
            Err(TdmxError::InvalidAxis { axis: 1, rank: 1 })
        );
    }

    #[test]
    fn test_leading_block_clamps() {
        let block = square3().leading_block(2, 2).unwrap();
        assert_eq!(block.data(), &[1.0, 2.0, 4.0, 5.0]);

        let clamped = square3().leading_block(10, 10).unwrap();
        assert_eq!(clamped.shape(), Shape::Matrix(3, 3));
    }

    #[test]
    fn test_dyn_array_into_f32() {
        let dynamic = DynArray::I32(Array::vector(alloc::vec![1, -2, 3]));
        assert_eq!(dynamic.data_type(), DataType::I32);
        let floats = dynamic.into_f32();
        assert_eq!(floats.data(), &[1.0, -2.0, 3.0]);
        assert_eq!(floats.shape(), Shape::Vector(3));
    }

    #[test]
    fn test_reshape_checks_cardinality() {
        let array = Array::vector(alloc::vec![0.0f32; 6]);
        assert!(array.clone().reshape(Shape::Matrix(2, 3)).is_ok());
        assert_eq!(
            array.reshape(Shape::Matrix(2, 2)),
            Err(TdmxError::LengthMismatch {
                len: 6,
                expected: 4
            })
        );
    }
}
