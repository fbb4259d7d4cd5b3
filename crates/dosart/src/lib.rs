#![forbid(unsafe_code)]

//! DOS-art texture pipeline: CP437/ANSI bytes in, named bitmap out.
//!
//! The umbrella crate ties the decode kernel (`dosart-parse`) and the
//! rasterizer (`dosart-raster`) together behind one call:
//!
//! ```
//! use dosart::{ArtRenderer, MemoryTextureStore};
//!
//! let store = MemoryTextureStore::new();
//! ArtRenderer::new().render(&store, "wall-art", b"\x1b[1;35m\xdb\xdb\xdb\n", 64, 32);
//! let texture = store.get("wall-art").unwrap();
//! assert_eq!(texture.width(), 64);
//! ```
//!
//! Decoding never fails: corrupt or empty input registers a loud
//! placeholder texture under the same key, so the key is always
//! resolvable after `render` returns.

pub mod renderer;
pub mod store;

pub use renderer::{ArtRenderer, CELL_HEIGHT, CELL_WIDTH};
pub use store::{MemoryTextureStore, TextureStore};

pub use dosart_parse::{
    BlockShape, Cell, CellGrid, ColorIndex, FALLBACK_COLUMNS, GraphicsState, content_end, parse,
};
pub use dosart_raster::{
    MID_GRAY, PALETTE, PackedRgba, PixelSurface, draw_cell, palette_color, placeholder,
    resample_nearest,
};
