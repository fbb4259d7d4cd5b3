#![forbid(unsafe_code)]

//! Pixel-block rasterization for decoded CP437 art.
//!
//! Takes the cell grids produced by `dosart-parse` down to pixels: the
//! fixed 16-color palette, an RGBA [`PixelSurface`], the per-cell block
//! rasterizer, nearest-neighbor resampling, and the placeholder bitmap
//! used when decoding yields nothing renderable.

pub mod color;
pub mod placeholder;
pub mod rasterize;
pub mod resample;
pub mod surface;

pub use color::{MID_GRAY, PALETTE, PackedRgba, palette_color};
pub use placeholder::placeholder;
pub use rasterize::draw_cell;
pub use resample::resample_nearest;
pub use surface::PixelSurface;
