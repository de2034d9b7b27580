//! Binary format definitions for the tagged matrix record
//!
//! This module contains pure data structure definitions for the wire format.
//! No I/O operations or concrete implementations - only format specifications.

pub mod constants;
pub mod header;

// Re-export format definitions
pub use header::{DataType, MdfHeader};
