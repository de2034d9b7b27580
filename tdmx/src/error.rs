//! Error types for codec and file operations

use tdmx_core::TdmxError;

/// Errors that can occur while decoding or encoding matrix files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural failure reported by the format layer
    #[error(transparent)]
    Format(#[from] TdmxError),
    /// Underlying stream failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Stream ended before the expected payload was complete
    #[error("stream ended after {got} of {expected} bytes")]
    Truncated { expected: usize, got: usize },
    /// Raw buffer supplied where axis labels are required
    #[error("raw buffers cannot be used where zone labels are required")]
    LabelsRequired,
    /// Row labels differ from column labels where a square table is required
    #[error("row labels do not match column labels")]
    LabelsNotSquare,
    /// More zones requested than the decoded matrix holds
    #[error("{requested} zones requested but the matrix only has {available}")]
    ZonesExceedMatrix { requested: usize, available: usize },
    /// Two values share one (row, col) zone pair
    #[error("duplicate entry for zone pair ({row}, {col})")]
    DuplicateIndex { row: i32, col: i32 },
}

/// Result type for codec and file operations
pub type Result<T> = std::result::Result<T, Error>;
