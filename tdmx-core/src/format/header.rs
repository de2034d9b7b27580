//! Tagged matrix record header
//!
//! This module contains the fixed header that opens every tagged matrix
//! record, plus the element type tags it can declare.

use crate::error::{Result, TdmxError};
use crate::format::constants::{MAX_RANK, MIN_RANK};

/// Fixed header ahead of every tagged matrix record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MdfHeader {
    /// Magic number identifying the format
    pub magic: u32,
    /// Format version
    pub version: u32,
    /// Element type tag (see [`DataType`])
    pub data_type: u32,
    /// Number of axes (1 or 2)
    pub ndim: u32,
}

impl MdfHeader {
    /// Magic number for tagged matrix records
    pub const MAGIC: u32 = 0xC4D4_F1B2;

    /// Current format version
    pub const VERSION: u32 = 1;

    /// Size of the header in bytes
    pub const SIZE: usize = 16;

    /// Create a header for the given element type and rank
    pub const fn new(data_type: DataType, ndim: u32) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            data_type: data_type.to_u32(),
            ndim,
        }
    }

    /// Parse a header from bytes (little-endian fields)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(TdmxError::InsufficientBuffer);
        }

        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let data_type = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let ndim = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

        Ok(Self {
            magic,
            version,
            data_type,
            ndim,
        })
    }

    /// Convert the header to bytes
    pub const fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        let magic = self.magic.to_le_bytes();
        bytes[0] = magic[0];
        bytes[1] = magic[1];
        bytes[2] = magic[2];
        bytes[3] = magic[3];

        let version = self.version.to_le_bytes();
        bytes[4] = version[0];
        bytes[5] = version[1];
        bytes[6] = version[2];
        bytes[7] = version[3];

        let data_type = self.data_type.to_le_bytes();
        bytes[8] = data_type[0];
        bytes[9] = data_type[1];
        bytes[10] = data_type[2];
        bytes[11] = data_type[3];

        let ndim = self.ndim.to_le_bytes();
        bytes[12] = ndim[0];
        bytes[13] = ndim[1];
        bytes[14] = ndim[2];
        bytes[15] = ndim[3];

        bytes
    }

    /// Check whether every field describes a supported record
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate magic, version, element tag, and rank
    pub fn validate(&self) -> Result<()> {
        let tag_ok = DataType::from_u32(self.data_type).is_some();
        let rank_ok = self.ndim >= MIN_RANK && self.ndim <= MAX_RANK;
        if self.magic != Self::MAGIC || self.version != Self::VERSION || !tag_ok || !rank_ok {
            return Err(self.to_error());
        }
        Ok(())
    }

    /// Element type declared by the header
    pub const fn data_type(&self) -> Option<DataType> {
        DataType::from_u32(self.data_type)
    }

    /// Error value carrying every observed header field
    pub const fn to_error(&self) -> TdmxError {
        TdmxError::InvalidHeader {
            magic: self.magic,
            version: self.version,
            data_type: self.data_type,
            ndim: self.ndim,
        }
    }
}

/// Element types a tagged record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum DataType {
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit floating point
    F64 = 2,
    /// 32-bit signed integer
    I32 = 3,
    /// 32-bit unsigned integer
    U32 = 4,
}

impl DataType {
    /// Convert from the wire tag
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(DataType::F32),
            2 => Some(DataType::F64),
            3 => Some(DataType::I32),
            4 => Some(DataType::U32),
            _ => None,
        }
    }

    /// Convert to the wire tag
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Get the size in bytes for this element type
    pub const fn size_bytes(self) -> usize {
        match self {
            DataType::F32 | DataType::I32 | DataType::U32 => 4,
            DataType::F64 => 8,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::U32 => write!(f, "u32"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_byte_round_trip() {
        let header = MdfHeader::new(DataType::F64, 2);
        let bytes = header.to_bytes();
        assert_eq!(MdfHeader::from_bytes(&bytes), Ok(header));
        assert!(header.is_valid());
    }

    #[test]
    fn test_header_layout_is_little_endian() {
        let bytes = MdfHeader::new(DataType::F32, 1).to_bytes();
        assert_eq!(&bytes[0..4], &[0xB2, 0xF1, 0xD4, 0xC4]);
        assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
        assert_eq!(&bytes[8..12], &[1, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_short_buffer() {
        assert_eq!(
            MdfHeader::from_bytes(&[0u8; 15]),
            Err(TdmxError::InsufficientBuffer)
        );
    }

    #[test]
    fn test_validate_carries_observed_fields() {
        let header = MdfHeader {
            magic: 0x1234_5678,
            version: 2,
            data_type: 9,
            ndim: 3,
        };
        assert_eq!(
            header.validate(),
            Err(TdmxError::InvalidHeader {
                magic: 0x1234_5678,
                version: 2,
                data_type: 9,
                ndim: 3,
            })
        );
        assert!(!header.is_valid());
    }

    #[test]
    fn test_rank_zero_is_rejected() {
        let header = MdfHeader {
            ndim: 0,
            ..MdfHeader::new(DataType::F32, 1)
        };
        assert!(header.validate().is_err());
    }

    #[test]
    fn test_data_type_tags() {
        assert_eq!(DataType::from_u32(1), Some(DataType::F32));
        assert_eq!(DataType::from_u32(4), Some(DataType::U32));
        assert_eq!(DataType::from_u32(0), None);
        assert_eq!(DataType::from_u32(5), None);
        assert_eq!(DataType::F64.size_bytes(), 8);
        assert_eq!(DataType::I32.to_u32(), 3);
    }
}
