//! hslakit I/O - PNG decode and encode for HSLA rasters
//!
//! Moves pixels between PNG files and [`Raster`]s. Any PNG layout the
//! decoder can expand to 8-bit RGBA is accepted on read; output is
//! always 8-bit RGBA.

mod error;
mod png;

pub use error::{IoError, IoResult};
pub use self::png::{read_png, write_png};

use hslakit_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a raster to a file path as PNG.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
