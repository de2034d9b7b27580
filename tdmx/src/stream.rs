//! Stream read/write primitives shared by the codecs

use std::io::{Read, Write};

use tdmx_core::constants::WORD_SIZE;
use tdmx_core::{validation, MatrixElement, TdmxError};

use crate::error::{Error, Result};

/// Read exactly `expected` bytes, reporting how far a short stream got
pub(crate) fn read_exact_bytes<R: Read>(reader: &mut R, expected: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut bytes)?;
    if bytes.len() != expected {
        return Err(Error::Truncated {
            expected,
            got: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Read a fixed number of typed elements in storage order
pub(crate) fn read_elements<T: MatrixElement, R: Read>(
    reader: &mut R,
    count: usize,
) -> Result<Vec<T>> {
    let byte_len = validation::checked_byte_size(count, T::size_bytes())?;
    let bytes = read_exact_bytes(reader, byte_len)?;
    let mut values = vec![T::zeroed(); count];
    bytemuck::cast_slice_mut::<T, u8>(&mut values).copy_from_slice(&bytes);
    Ok(values)
}

/// Read every remaining word of the stream as float32 values
pub(crate) fn read_remaining_f32s<R: Read>(reader: &mut R) -> Result<Vec<f32>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() % WORD_SIZE != 0 {
        return Err(TdmxError::NotWordAligned { bytes: bytes.len() }.into());
    }
    let mut words = vec![0.0f32; bytes.len() / WORD_SIZE];
    bytemuck::cast_slice_mut::<f32, u8>(&mut words).copy_from_slice(&bytes);
    Ok(words)
}

/// Write typed elements in storage order
pub(crate) fn write_elements<T: MatrixElement, W: Write>(
    writer: &mut W,
    values: &[T],
) -> Result<()> {
    writer.write_all(bytemuck::cast_slice::<T, u8>(values))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_short_stream_reports_progress() {
        let mut reader = Cursor::new(vec![0u8; 10]);
        let err = read_exact_bytes(&mut reader, 16).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                expected: 16,
                got: 10
            }
        ));
    }

    #[test]
    fn test_element_round_trip() {
        let values = vec![1.5f32, -2.25, 0.0, 4096.0];
        let mut encoded = Vec::new();
        write_elements(&mut encoded, &values).unwrap();
        assert_eq!(encoded.len(), 16);

        let mut reader = Cursor::new(encoded);
        let decoded: Vec<f32> = read_elements(&mut reader, 4).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_remaining_words_must_be_whole() {
        let mut reader = Cursor::new(vec![0u8; 7]);
        let err = read_remaining_f32s(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(TdmxError::NotWordAligned { bytes: 7 })
        ));
    }

    #[test]
    fn test_empty_stream_reads_no_words() {
        let mut reader = Cursor::new(Vec::new());
        assert_eq!(read_remaining_f32s(&mut reader).unwrap(), Vec::<f32>::new());
    }
}
