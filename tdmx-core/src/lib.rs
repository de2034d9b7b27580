#![no_std]

//! TDMX Core - Travel Demand Matrix Format Definitions
//!
//! This crate provides wire format definitions, element traits, dense array
//! storage, and dimension validation for the legacy binary matrix layouts
//! used by travel demand models

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod array;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub use array::*;
pub use error::*;
pub use format::*;
pub use traits::*;
