//! TDMX - Travel Demand Matrix Exchange
//!
//! This library reads and writes the legacy binary matrix formats used
//! by travel demand models: tagged matrix records, headerless square
//! float buffers, and row-indexed layouts whose leading word holds an
//! int32 row index bit-reinterpreted as a float32.
//!
//! ## Architecture
//!
//! TDMX follows a clean specification/implementation separation:
//!
//! - **tdmx-core**: Pure format definitions, element traits, and
//!   dimension inference (no I/O)
//! - **tdmx**: Stream codecs, labeled containers, and file adapters
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tdmx::{load_emx, MatrixData, Zones};
//!
//! fn example() -> tdmx::Result<()> {
//!     // Read the leading 50x50 block of a square float buffer
//!     let matrix = load_emx("demand.emx", Some(Zones::Count(50)), false)?;
//!     if let MatrixData::Raw(values) = matrix {
//!         println!("decoded {} cells", values.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Formats
//!
//! - **Tagged records**: self-describing header, zone labels on both
//!   axes, four element types
//! - **Square float buffers**: no header, extent recovered from the
//!   byte length, fixed extent on write
//! - **Row-indexed layouts**: square files whose extent is recovered
//!   from the length, and rectangular files of caller-known width

// Re-export core abstractions and format definitions
pub use tdmx_core::{
    // Storage containers
    Array, DynArray, Shape,
    // Format definitions
    DataType, MdfHeader,
    // Element trait
    MatrixElement,
    // Format error type
    TdmxError,
};

// Implementation modules
pub mod coerce;
pub mod emx;
pub mod error;
pub mod file;
pub mod fortran;
pub mod labeled;
pub mod matrix;
pub mod mdf;
mod stream;

// Public exports
pub use coerce::{coerce_labeled, coerce_matrix, MatrixSource};
pub use emx::{from_emx, to_emx};
pub use error::{Error, Result};
pub use file::{
    load_emx, load_fortran_rectangle, load_fortran_square, load_mdf, load_mdf_header, save_emx,
    save_fortran, save_mdf,
};
pub use fortran::{from_fortran_rectangle, from_fortran_square, to_fortran, RectangleOptions};
pub use labeled::{LabeledMatrix, LabeledSeries, LabeledVector};
pub use matrix::{MatrixData, Zones};
pub use mdf::{from_mdf, read_header, to_mdf};
