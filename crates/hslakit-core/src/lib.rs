//! hslakit Core - Basic data structures for HSLA image processing
//!
//! This crate provides the data model shared by the hslakit crates:
//!
//! - [`Hsla`] - A pixel in the hue/saturation/luminance/alpha color model
//! - [`Raster`] - The owned 2D pixel grid transforms operate on
//! - [`color`] - RGBA byte conversion used at the I/O boundary
//!
//! Transforms mutate a [`Raster`] in place through its mutable pixel
//! accessor; the raster has exactly one owner at all times.

pub mod color;
pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Hsla, Raster};
