//! Path-based adapters over the stream codecs
//!
//! Loads open the file behind a memory map when the `mmap` feature is
//! enabled and the file is non-empty, falling back to buffered reads.
//! Saves go through a buffered writer and flush before returning.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};
#[cfg(feature = "mmap")]
use std::io::Cursor;

use tdmx_core::MdfHeader;

use crate::coerce::MatrixSource;
use crate::emx::{from_emx, to_emx};
use crate::error::Result;
use crate::fortran::{from_fortran_rectangle, from_fortran_square, to_fortran, RectangleOptions};
use crate::matrix::{MatrixData, Zones};
use crate::mdf::{from_mdf, read_header, to_mdf};

/// Read source selected per file at open time
enum PathReader {
    #[cfg(feature = "mmap")]
    Mapped(Cursor<Mmap>),
    Buffered(BufReader<File>),
}

impl Read for PathReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            #[cfg(feature = "mmap")]
            PathReader::Mapped(cursor) => cursor.read(buf),
            PathReader::Buffered(reader) => reader.read(buf),
        }
    }
}

/// Open a file for decoding, mapping it when possible
///
/// Zero-length files stay on the buffered path since mapping them is
/// platform-dependent.
fn open_reader<P: AsRef<Path>>(path: P) -> Result<PathReader> {
    let file = File::open(path)?;
    #[cfg(feature = "mmap")]
    if file.metadata()?.len() > 0 {
        // SAFETY: read-only mapping, never written through; the file must
        // not be truncated while the cursor is live
        let map = unsafe { MmapOptions::new().map(&file)? };
        return Ok(PathReader::Mapped(Cursor::new(map)));
    }
    Ok(PathReader::Buffered(BufReader::new(file)))
}

/// Decode a tagged matrix file
pub fn load_mdf<P: AsRef<Path>>(path: P, raw: bool, tall: bool) -> Result<MatrixData> {
    let mut reader = open_reader(path)?;
    from_mdf(&mut reader, raw, tall)
}

/// Read only the header of a tagged matrix file
pub fn load_mdf_header<P: AsRef<Path>>(path: P) -> Result<MdfHeader> {
    let mut reader = open_reader(path)?;
    read_header(&mut reader)
}

/// Decode a headerless square matrix file
pub fn load_emx<P: AsRef<Path>>(path: P, zones: Option<Zones>, tall: bool) -> Result<MatrixData> {
    let mut reader = open_reader(path)?;
    from_emx(&mut reader, zones, tall)
}

/// Decode a square row-indexed file
pub fn load_fortran_square<P: AsRef<Path>>(
    path: P,
    zones: Option<Zones>,
    tall: bool,
) -> Result<MatrixData> {
    let mut reader = open_reader(path)?;
    from_fortran_square(&mut reader, zones, tall)
}

/// Decode a rectangular row-indexed file of known width
pub fn load_fortran_rectangle<P: AsRef<Path>>(
    path: P,
    n_columns: usize,
    options: RectangleOptions,
) -> Result<MatrixData> {
    let mut reader = open_reader(path)?;
    from_fortran_rectangle(&mut reader, n_columns, options)
}

/// Encode a labeled matrix to a tagged matrix file
pub fn save_mdf<M: Into<MatrixSource>, P: AsRef<Path>>(matrix: M, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_mdf(matrix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a square matrix to a headerless file at a fixed extent
pub fn save_emx<M: Into<MatrixSource>, P: AsRef<Path>>(
    matrix: M,
    path: P,
    target_dimension: usize,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_emx(matrix, &mut writer, target_dimension)?;
    writer.flush()?;
    Ok(())
}

/// Encode a matrix to a row-indexed file
pub fn save_fortran<M: Into<MatrixSource>, P: AsRef<Path>>(
    matrix: M,
    path: P,
    force_square: bool,
    min_index: i32,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    to_fortran(matrix, &mut writer, force_square, min_index)?;
    writer.flush()?;
    Ok(())
}
