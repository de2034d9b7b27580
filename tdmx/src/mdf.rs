//! Tagged matrix record codec
//!
//! A record opens with the fixed [`MdfHeader`], then carries one u32
//! extent per axis, one block of int32 zone labels per axis, and the
//! payload in row-major storage order. Header fields are little-endian;
//! the blocks after it use the platform byte order, matching writers
//! that dump typed arrays straight to disk.

use std::io::{Read, Write};

use tdmx_core::validation;
use tdmx_core::{Array, DataType, DynArray, MdfHeader, Shape, TdmxError};

use crate::coerce::{coerce_labeled, MatrixSource};
use crate::error::Result;
use crate::labeled::{LabeledMatrix, LabeledVector};
use crate::matrix::MatrixData;
use crate::stream::{read_elements, read_exact_bytes, write_elements};

/// Read and validate the header that opens a tagged record
pub fn read_header<R: Read>(reader: &mut R) -> Result<MdfHeader> {
    let bytes = read_exact_bytes(reader, MdfHeader::SIZE)?;
    let header = MdfHeader::from_bytes(&bytes)?;
    header.validate()?;
    Ok(header)
}

/// Decode a tagged matrix record
///
/// `raw` skips label attachment and keeps the element type the header
/// declares. `tall` reshapes rank-2 output: raw storage drops to rank 1
/// and labeled output becomes a series keyed by zone pairs.
pub fn from_mdf<R: Read>(reader: &mut R, raw: bool, tall: bool) -> Result<MatrixData> {
    let header = read_header(reader)?;
    match header.ndim {
        1 => {
            let extents = read_elements::<u32, _>(reader, 1)?;
            let len = extents[0] as usize;
            let labels = read_elements::<i32, _>(reader, len)?;
            let payload = read_payload(reader, &header, len)?;
            if raw {
                return Ok(MatrixData::Raw(payload));
            }
            let vector = LabeledVector::new(labels, payload.into_f32().into_vec())?;
            Ok(MatrixData::Vector(vector))
        }
        2 => {
            let extents = read_elements::<u32, _>(reader, 2)?;
            let rows = extents[0] as usize;
            let cols = extents[1] as usize;
            let count = validation::checked_element_count(rows, cols)?;
            let row_labels = read_elements::<i32, _>(reader, rows)?;
            let col_labels = read_elements::<i32, _>(reader, cols)?;
            let payload = read_payload(reader, &header, count)?;
            if raw {
                let array = if tall {
                    payload
                } else {
                    payload.reshape(Shape::Matrix(rows, cols))?
                };
                return Ok(MatrixData::Raw(array));
            }
            let values = payload.into_f32().reshape(Shape::Matrix(rows, cols))?;
            let labeled = LabeledMatrix::new(values, row_labels, col_labels)?;
            Ok(if tall {
                MatrixData::Series(labeled.stack())
            } else {
                MatrixData::Matrix(labeled)
            })
        }
        // read_header already rejects other ranks
        _ => Err(header.to_error().into()),
    }
}

/// Read the payload block in the element type the header declares
fn read_payload<R: Read>(reader: &mut R, header: &MdfHeader, count: usize) -> Result<DynArray> {
    let payload = match header.data_type() {
        Some(DataType::F32) => DynArray::F32(Array::vector(read_elements(reader, count)?)),
        Some(DataType::F64) => DynArray::F64(Array::vector(read_elements(reader, count)?)),
        Some(DataType::I32) => DynArray::I32(Array::vector(read_elements(reader, count)?)),
        Some(DataType::U32) => DynArray::U32(Array::vector(read_elements(reader, count)?)),
        None => return Err(header.to_error().into()),
    };
    Ok(payload)
}

/// Encode a labeled matrix as a rank-2 tagged record
///
/// Input must carry labels; a series is unstacked first. Storage is
/// written as float32.
pub fn to_mdf<M: Into<MatrixSource>, W: Write>(matrix: M, writer: &mut W) -> Result<()> {
    let matrix = coerce_labeled(matrix)?;
    let rows = u32::try_from(matrix.rows()).map_err(|_| TdmxError::SizeOverflow)?;
    let cols = u32::try_from(matrix.cols()).map_err(|_| TdmxError::SizeOverflow)?;

    writer.write_all(&MdfHeader::new(DataType::F32, 2).to_bytes())?;
    write_elements(writer, &[rows, cols])?;
    write_elements(writer, matrix.row_labels())?;
    write_elements(writer, matrix.col_labels())?;
    write_elements(writer, matrix.values().data())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn push_words<T: bytemuck::Pod>(buffer: &mut Vec<u8>, values: &[T]) {
        buffer.extend_from_slice(bytemuck::cast_slice::<T, u8>(values));
    }

    #[test]
    fn test_vector_record_decodes() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MdfHeader::new(DataType::F32, 1).to_bytes());
        push_words(&mut bytes, &[3u32]);
        push_words(&mut bytes, &[7i32, 8, 9]);
        push_words(&mut bytes, &[0.5f32, 1.5, 2.5]);

        let decoded = from_mdf(&mut Cursor::new(bytes), false, false).unwrap();
        let vector = decoded.into_vector().unwrap();
        assert_eq!(vector.labels(), &[7, 8, 9]);
        assert_eq!(vector.values(), &[0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_raw_keeps_integer_storage() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MdfHeader::new(DataType::I32, 2).to_bytes());
        push_words(&mut bytes, &[2u32, 2]);
        push_words(&mut bytes, &[1i32, 2]);
        push_words(&mut bytes, &[1i32, 2]);
        push_words(&mut bytes, &[10i32, 20, 30, 40]);

        let decoded = from_mdf(&mut Cursor::new(bytes), true, false).unwrap();
        let raw = decoded.into_raw().unwrap();
        assert_eq!(raw.data_type(), DataType::I32);
        assert_eq!(raw.shape(), Shape::Matrix(2, 2));
    }

    #[test]
    fn test_rejects_unknown_type_tag() {
        let header = MdfHeader {
            data_type: 9,
            ..MdfHeader::new(DataType::F32, 2)
        };
        let bytes = header.to_bytes().to_vec();

        let err = from_mdf(&mut Cursor::new(bytes), false, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(TdmxError::InvalidHeader { data_type: 9, .. })
        ));
    }

    #[test]
    fn test_encode_decode_preserves_labels() {
        let values =
            Array::from_vec((0..6).map(|v| v as f32).collect(), Shape::Matrix(2, 3)).unwrap();
        let matrix = LabeledMatrix::new(values, vec![101, 102], vec![201, 202, 203]).unwrap();

        let mut bytes = Vec::new();
        to_mdf(matrix.clone(), &mut bytes).unwrap();
        let decoded = from_mdf(&mut Cursor::new(bytes), false, false).unwrap();
        assert_eq!(decoded.into_matrix().unwrap(), matrix);
    }

    #[test]
    fn test_encode_rejects_raw_input() {
        let raw = Array::from_vec(vec![0.0f32; 4], Shape::Matrix(2, 2)).unwrap();
        let mut bytes = Vec::new();
        let err = to_mdf(raw, &mut bytes).unwrap_err();
        assert!(matches!(err, Error::LabelsRequired));
    }
}
