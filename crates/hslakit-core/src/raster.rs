//! RASTER - The HSLA image container
//!
//! A `Raster` is a 2D grid of [`Hsla`] pixels addressed by `(x, y)`
//! coordinates with `0 <= x < width`, `0 <= y < height`.
//!
//! # Ownership model
//!
//! A `Raster` has exactly one owner and is mutated in place through
//! [`Raster::pixel_mut`]. Transforms take the raster by value and return
//! the same (mutated) raster, so no aliasing with a caller-retained
//! handle is possible.
//!
//! # Zero-sized rasters
//!
//! Zero-width and zero-height rasters are valid; every per-pixel
//! operation over them is an empty iteration.

use crate::error::{Error, Result};

/// A single pixel in the HSLA color model.
///
/// Fields:
/// - `h`: hue in degrees, domain [0, 360)
/// - `s`: saturation, domain [0, 1]
/// - `l`: luminance, domain [0, 1]
/// - `a`: alpha, domain [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    /// Create a pixel from its four channel values.
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

impl Default for Hsla {
    /// Opaque white.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 0.0,
            l: 1.0,
            a: 1.0,
        }
    }
}

/// RASTER - Main image container
///
/// Row-major grid of [`Hsla`] pixels.
///
/// # Examples
///
/// ```
/// use hslakit_core::Raster;
///
/// let mut raster = Raster::new(640, 480);
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
///
/// if let Some(px) = raster.pixel_mut(10, 20) {
///     px.l = 0.5;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Hsla>,
}

impl Raster {
    /// Create a new raster with every pixel set to [`Hsla::default`].
    ///
    /// Zero dimensions are allowed and produce an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Raster {
            width,
            height,
            pixels: vec![Hsla::default(); len],
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&Hsla> {
        self.index(x, y).map(|i| &self.pixels[i])
    }

    /// Get a mutable reference to the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds. Writes through
    /// the returned reference land directly in the raster's backing
    /// storage.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Hsla> {
        self.index(x, y).map(|i| &mut self.pixels[i])
    }

    /// Get a copy of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Result<Hsla> {
        self.pixel(x, y).copied().ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, pixel: Hsla) -> Result<()> {
        let (width, height) = (self.width, self.height);
        match self.pixel_mut(x, y) {
            Some(slot) => {
                *slot = pixel;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }
}
