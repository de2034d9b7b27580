//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements in the supported layouts.

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// All element types must be plain-old-data so payload blocks can be
/// reinterpreted to and from raw bytes without per-element conversion:
/// - Pod: fixed layout, any bit pattern valid, no padding
/// - PartialEq: can be compared for equality
pub trait MatrixElement: bytemuck::Pod + PartialEq {
    /// Get the wire tag for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn data_type() -> DataType {
        DataType::I32
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for u32 {
    fn data_type() -> DataType {
        DataType::U32
    }

    fn from_f64(value: f64) -> Self {
        value as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}
