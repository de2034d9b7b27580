//! Format constants shared across the matrix codecs

/// Size in bytes of one storage word (all supported layouts are 32-bit based)
pub const WORD_SIZE: usize = 4;

/// Lowest rank a tagged record may declare
pub const MIN_RANK: u32 = 1;

/// Highest rank a tagged record may declare
pub const MAX_RANK: u32 = 2;
