#![forbid(unsafe_code)]

//! Byte-stream parser: CP437/ANSI bytes in, cell grid out.
//!
//! The parser never fails. Malformed input degrades to a smaller or
//! empty grid; a zero-size grid is the only failure signal a caller
//! sees. One left-to-right pass over the content region handles escape
//! sequences, control bytes, and the CP437 shape mapping.
//!
//! Two layout modes exist, detected before the scan:
//!
//! - **newline-delimited**: any 0x0A in the content closes rows;
//! - **fixed-width**: no line feeds at all, rows are force-closed every
//!   80 columns (the classic ANSI terminal width).

use memchr::memchr;
use smallvec::SmallVec;

use crate::cell::{BlockShape, Cell, ColorIndex};
use crate::grid::CellGrid;
use crate::sauce::{EOF_MARKER, content_end};
use crate::state::GraphicsState;

/// Row width used when a file carries no line feeds.
pub const FALLBACK_COLUMNS: usize = 80;

/// Tab stops are every 8 columns.
const TAB_STOP: usize = 8;

/// Accumulates cells into rows, force-closing at a fixed width when the
/// source has no line feeds of its own.
struct GridBuilder {
    grid: CellGrid,
    row: Vec<Cell>,
    forced_width: Option<usize>,
}

impl GridBuilder {
    fn new(forced_width: Option<usize>) -> Self {
        Self {
            grid: CellGrid::new(),
            row: Vec::new(),
            forced_width,
        }
    }

    fn push(&mut self, cell: Cell) {
        self.row.push(cell);
        if let Some(width) = self.forced_width {
            if self.row.len() >= width {
                self.close_row();
            }
        }
    }

    fn close_row(&mut self) {
        self.grid.push_row(core::mem::take(&mut self.row));
    }

    fn row_len(&self) -> usize {
        self.row.len()
    }

    fn finish(mut self) -> CellGrid {
        // An in-progress row with cells becomes the final row; an empty
        // one is not emitted.
        if !self.row.is_empty() {
            self.close_row();
        }
        self.grid
    }
}

/// Parse one numeric SGR parameter. Empty or non-numeric segments
/// default to 0; oversized values saturate (and end up ignored as
/// unrecognized codes).
fn parse_param(segment: &[u8]) -> u16 {
    if segment.is_empty() || !segment.iter().all(u8::is_ascii_digit) {
        return 0;
    }
    let mut value: u32 = 0;
    for &byte in segment {
        value = value * 10 + u32::from(byte - b'0');
        if value > u32::from(u16::MAX) {
            return u16::MAX;
        }
    }
    value as u16
}

/// Cursor-forward repeat count: leading parameter, minimum 1.
fn cursor_forward_count(params: &[u8]) -> usize {
    let first = params.split(|&b| b == b';').next().unwrap_or(params);
    match parse_param(first) {
        0 => 1,
        n => n as usize,
    }
}

/// Decode a byte buffer into a grid of cells.
///
/// Detects and strips a SAUCE trailer or EOF marker, infers the layout
/// mode, and runs the main scan with [`GraphicsState`] threaded through
/// it. Never panics and never errors; see the module docs for the
/// degradation rules.
#[must_use]
pub fn parse(bytes: &[u8]) -> CellGrid {
    let content = &bytes[..content_end(bytes)];
    let has_newlines = memchr(b'\n', content).is_some();

    let mut builder = GridBuilder::new((!has_newlines).then_some(FALLBACK_COLUMNS));
    let mut state = GraphicsState::default();

    let mut i = 0;
    while i < content.len() {
        let byte = content[i];

        // CSI escape sequence: ESC [ params command
        if byte == 0x1B && i + 1 < content.len() && content[i + 1] == b'[' {
            i += 2;
            let param_start = i;
            while i < content.len() && !(0x40..=0x7E).contains(&content[i]) {
                i += 1;
            }
            let Some(&command) = content.get(i) else {
                // Unterminated sequence at the content boundary: keep
                // everything parsed so far.
                break;
            };
            let params = &content[param_start..i];
            i += 1;

            match command {
                // SGR: apply each parameter in order.
                b'm' => {
                    let codes: SmallVec<[u16; 8]> =
                        params.split(|&b| b == b';').map(parse_param).collect();
                    for code in codes {
                        state.apply_sgr(code);
                    }
                }
                // Cursor forward: treat as a run of empty cells.
                b'C' => {
                    for _ in 0..cursor_forward_count(params) {
                        builder.push(empty_cell(&state));
                    }
                }
                // Everything else (cursor positioning etc.) is consumed
                // with no cell effect.
                _ => {}
            }
            continue;
        }

        match byte {
            b'\n' => builder.close_row(),
            b'\r' => {}
            EOF_MARKER => break,
            b'\t' => {
                let pad = TAB_STOP - (builder.row_len() % TAB_STOP);
                for _ in 0..pad {
                    builder.push(empty_cell(&state));
                }
            }
            // NUL pads fixed-width files; render it as a space.
            0x00 => builder.push(empty_cell(&state)),
            b if b < 0x20 => {}
            b => builder.push(Cell::new(
                BlockShape::from_cp437(b),
                ColorIndex::new_masked(state.fg),
                ColorIndex::new_masked(state.bg),
            )),
        }
        i += 1;
    }

    let grid = builder.finish();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = grid.height(),
        max_width = grid.width(),
        "parsed art grid"
    );
    grid
}

fn empty_cell(state: &GraphicsState) -> Cell {
    Cell::empty(
        ColorIndex::new_masked(state.fg),
        ColorIndex::new_masked(state.bg),
    )
}


#[cfg(test)]
mod parser_proptests {
    use super::parse;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics_and_grid_laws_hold(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let grid = parse(&bytes);
            let longest = grid.rows().iter().map(Vec::len).max().unwrap_or(0);
            prop_assert_eq!(grid.width(), longest);
            prop_assert_eq!(grid.height(), grid.rows().len());
            for row in grid.rows() {
                for cell in row {
                    prop_assert!(cell.fg.get() <= 15);
                    prop_assert!(cell.bg.get() <= 15);
                }
            }
        }

        #[test]
        fn sauce_trailer_is_invisible(
            content in proptest::collection::vec(any::<u8>(), 0..256),
            trailer in proptest::collection::vec(any::<u8>(), 1..120),
        ) {
            // Only meaningful when the content itself carries no early
            // boundary marker the trailer scan could latch onto.
            prop_assume!(!content.contains(&0x1A));
            prop_assume!(!content.windows(5).any(|w| w == b"SAUCE"));

            let mut with_trailer = content.clone();
            with_trailer.extend_from_slice(b"SAUCE");
            with_trailer.extend_from_slice(&trailer);
            prop_assert_eq!(parse(&content), parse(&with_trailer));
        }
    }
}
