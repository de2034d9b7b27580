//! Error types for matrix format operations

/// Errors that can occur while interpreting matrix layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TdmxError {
    /// Header fields do not describe a supported record
    InvalidHeader {
        /// Observed magic number
        magic: u32,
        /// Observed format version
        version: u32,
        /// Observed element type tag
        data_type: u32,
        /// Observed axis count
        ndim: u32,
    },
    /// Buffer too small to hold a complete header
    InsufficientBuffer,
    /// Rank-2 buffer whose axes differ where a square matrix is required
    NotSquare { rows: usize, cols: usize },
    /// Buffer of the wrong rank for the operation
    WrongRank { rank: usize },
    /// Element count has no integer square root
    NonSquareLength { elements: usize },
    /// Element count does not divide into whole index-prefixed square rows
    NonIndexedLength { elements: usize },
    /// Element count does not divide into rows of the declared width
    RaggedRows { elements: usize, row_width: usize },
    /// Byte count is not a whole number of storage words
    NotWordAligned { bytes: usize },
    /// Buffer length disagrees with the declared shape
    LengthMismatch { len: usize, expected: usize },
    /// Axis index outside the array rank
    InvalidAxis { axis: usize, rank: usize },
    /// Stored row index outside the zone system
    IndexOutOfBounds { index: i64, bound: usize },
    /// Dimension parameter of zero where at least one is required
    ZeroDimension,
    /// Size calculation would overflow
    SizeOverflow,
}

impl core::fmt::Display for TdmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TdmxError::InvalidHeader {
                magic,
                version,
                data_type,
                ndim,
            } => write!(
                f,
                "unexpected file header: magic number: {magic:X}, version: {version}, \
                 data type: {data_type}, dimensions: {ndim}"
            ),
            TdmxError::InsufficientBuffer => write!(f, "buffer too small for a file header"),
            TdmxError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows} rows x {cols} columns")
            }
            TdmxError::WrongRank { rank } => write!(f, "expected a rank-2 array, got rank {rank}"),
            TdmxError::NonSquareLength { elements } => {
                write!(f, "{elements} elements do not form a square matrix")
            }
            TdmxError::NonIndexedLength { elements } => {
                write!(f, "{elements} elements do not form index-prefixed square rows")
            }
            TdmxError::RaggedRows { elements, row_width } => {
                write!(f, "{elements} elements do not divide into rows of {row_width} words")
            }
            TdmxError::NotWordAligned { bytes } => {
                write!(f, "{bytes} bytes is not a whole number of 32-bit words")
            }
            TdmxError::LengthMismatch { len, expected } => {
                write!(f, "length {len} does not match the expected {expected}")
            }
            TdmxError::InvalidAxis { axis, rank } => {
                write!(f, "axis {axis} is out of range for a rank-{rank} array")
            }
            TdmxError::IndexOutOfBounds { index, bound } => {
                write!(f, "stored index {index} is out of range for {bound} zones")
            }
            TdmxError::ZeroDimension => write!(f, "dimension must be at least 1"),
            TdmxError::SizeOverflow => write!(f, "size calculation would overflow"),
        }
    }
}

impl core::error::Error for TdmxError {}

/// Result type for matrix format operations
pub type Result<T> = core::result::Result<T, TdmxError>;
