#![forbid(unsafe_code)]

//! CP437/ANSI art decoding: byte streams in, cell grids out.
//!
//! This crate is the decode kernel of the workspace. It turns a raw
//! `.ans`-style byte buffer (optionally carrying a SAUCE trailer or a
//! DOS EOF marker) into a ragged grid of [`Cell`]s, each a block shape
//! plus a foreground/background palette index. Rasterization lives in
//! `dosart-raster`; this crate performs no pixel work.
//!
//! Decoding never fails: malformed input degrades to a smaller grid,
//! and an empty grid is the only failure signal.

pub mod cell;
pub mod grid;
pub mod parser;
pub mod sauce;
pub mod state;

pub use cell::{BlockShape, Cell, ColorIndex};
pub use grid::CellGrid;
pub use parser::{FALLBACK_COLUMNS, parse};
pub use sauce::content_end;
pub use state::GraphicsState;
