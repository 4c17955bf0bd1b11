//! NumPy `.npy` support for 2D `f32` masks
//!
//! Thin wrappers over `ndarray-npy` that map its errors into the crate's
//! error type. Masks are little-endian `float32` in C order.

use crate::error::IoError;
use ndarray::{Array2, ArrayView2};
use ndarray_npy::{ReadNpyError, ReadNpyExt, WriteNpyError, WriteNpyExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use synthpose_core::Result;

/// Write `array` to `path` in `.npy` format
pub fn write_npy<P: AsRef<Path>>(path: P, array: ArrayView2<f32>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_npy_to_writer(&mut writer, array)?;
    writer.flush()?;
    Ok(())
}

/// Write `array` in `.npy` format to any writer.
///
/// Non-contiguous views are written in logical (row-major) order.
pub fn write_npy_to_writer<W: Write>(writer: W, array: ArrayView2<f32>) -> Result<()> {
    array.write_npy(writer).map_err(|e| write_error(e).into())
}

/// Read a 2D `f32` array from a `.npy` file
pub fn read_npy<P: AsRef<Path>>(path: P) -> Result<Array2<f32>> {
    let file = File::open(path.as_ref())?;
    read_npy_from_reader(BufReader::new(file))
}

/// Read a 2D `f32` array in `.npy` format from any reader
pub fn read_npy_from_reader<R: Read>(reader: R) -> Result<Array2<f32>> {
    Array2::<f32>::read_npy(reader).map_err(|e| read_error(e).into())
}

fn write_error(err: WriteNpyError) -> IoError {
    match err {
        WriteNpyError::Io(e) => IoError::Io(e),
        other => IoError::InvalidFormat { format: other.to_string() },
    }
}

fn read_error(err: ReadNpyError) -> IoError {
    match err {
        ReadNpyError::Io(e) => IoError::Io(e),
        other => IoError::ParseError { message: other.to_string() },
    }
}
