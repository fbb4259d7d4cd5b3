#![forbid(unsafe_code)]

//! Pixel surface storage.
//!
//! A [`PixelSurface`] is a plain RGBA buffer with explicit dimensions.
//! Writes outside the surface are silently clipped, so callers can draw
//! shapes near the edge without pre-clamping.
//!
//! # Invariants
//!
//! 1. `pixels.len() == width * height`
//! 2. Width and height never change after creation and are both > 0

use crate::color::PackedRgba;

/// A 2D buffer of RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<PackedRgba>,
}

impl PixelSurface {
    /// Create a fully transparent surface.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0, "surface width must be > 0");
        assert!(height > 0, "surface height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![PackedRgba::TRANSPARENT; size],
        }
    }

    /// Surface width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Convert (x, y) to a linear index, or `None` out of bounds.
    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// The pixel at (x, y), or `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<PackedRgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write the pixel at (x, y). Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: PackedRgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: PackedRgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y..y_end {
            let row_start = py as usize * self.width as usize;
            for px in x..x_end {
                self.pixels[row_start + px as usize] = color;
            }
        }
    }

    /// Raw pixel slice, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[PackedRgba] {
        &self.pixels
    }
}
