#![forbid(unsafe_code)]

//! Texture assembler: bytes to registered bitmap.
//!
//! Glues the three stages together: decode the byte buffer into a cell
//! grid, rasterize every cell at the fixed 8x16 character-cell size,
//! downsample to the caller-requested dimensions, and publish the
//! result into a [`TextureStore`]. The contract is "always register
//! some valid bitmap": unparsable input registers the placeholder
//! instead of surfacing an error.

use dosart_parse::parse;
use dosart_raster::{PixelSurface, draw_cell, placeholder, resample_nearest};

use crate::store::TextureStore;

/// Character cell width in pixels (classic fixed-pitch text mode).
pub const CELL_WIDTH: u32 = 8;

/// Character cell height in pixels.
pub const CELL_HEIGHT: u32 = 16;

/// Stateless decoder/rasterizer front end.
///
/// Holds no per-call state, so one instance can serve any number of
/// render calls; parallel calls are fine as long as each uses a
/// distinct key (the store's `replace` is the critical section).
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtRenderer;

impl ArtRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decode `bytes` and register the result under `key`.
    ///
    /// The registered texture always has exactly `target_w`×`target_h`
    /// pixels, whatever the source art's dimensions: the natural-size
    /// rasterization is resampled with nearest-neighbor interpolation,
    /// and the placeholder path builds at target size directly. Aspect
    /// ratio is the caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if `target_w` or `target_h` is 0.
    pub fn render<S: TextureStore>(
        &self,
        store: &S,
        key: &str,
        bytes: &[u8],
        target_w: u32,
        target_h: u32,
    ) {
        let grid = parse(bytes);
        if grid.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, "no renderable content, registering placeholder");
            store.replace(key, placeholder(target_w, target_h));
            return;
        }

        let natural_w = grid.width() as u32 * CELL_WIDTH;
        let natural_h = grid.height() as u32 * CELL_HEIGHT;
        let mut natural = PixelSurface::new(natural_w, natural_h);

        for (row_idx, row) in grid.rows().iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                draw_cell(
                    &mut natural,
                    cell,
                    col_idx as u32 * CELL_WIDTH,
                    row_idx as u32 * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                );
            }
        }

        let scaled = resample_nearest(&natural, target_w, target_h);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key,
            cols = grid.width(),
            rows = grid.height(),
            target_w,
            target_h,
            "registered art texture"
        );
        store.replace(key, scaled);
    }
}
