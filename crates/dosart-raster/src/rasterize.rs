#![forbid(unsafe_code)]

//! Cell rasterizer: one decoded cell into one pixel rectangle.
//!
//! Pure function of its inputs and fully deterministic: the same
//! `(x, y, w, h)` always produces the same pixel positions, which test
//! fixtures rely on. Shape dispatch is an exhaustive `match` over the
//! closed [`BlockShape`] set.

use dosart_parse::{BlockShape, Cell};

use crate::color::palette_color;
use crate::surface::PixelSurface;

/// Paint `cell` into the `w`×`h` rectangle at `(x, y)`.
///
/// Background index 0 is treated as transparent (left unpainted) so
/// decoded art composites over whatever sits behind the texture; any
/// other background index fills the whole rectangle first.
pub fn draw_cell(surface: &mut PixelSurface, cell: Cell, x: u32, y: u32, w: u32, h: u32) {
    if cell.bg.get() != 0 {
        surface.fill_rect(x, y, w, h, palette_color(cell.bg.get()));
    }

    if cell.shape == BlockShape::Empty {
        return;
    }

    let fg = palette_color(cell.fg.get());
    let half_w = w / 2;
    let half_h = h / 2;

    match cell.shape {
        BlockShape::Empty => {}
        BlockShape::Full => surface.fill_rect(x, y, w, h, fg),
        BlockShape::TopHalf => surface.fill_rect(x, y, w, half_h, fg),
        BlockShape::BottomHalf => surface.fill_rect(x, y + half_h, w, h - half_h, fg),
        BlockShape::LeftHalf => surface.fill_rect(x, y, half_w, h, fg),
        BlockShape::RightHalf => surface.fill_rect(x + half_w, y, w - half_w, h, fg),
        BlockShape::ShadeLight => {
            for (px, py) in sparse_dots(w, h) {
                surface.set(x + px, y + py, fg);
            }
        }
        BlockShape::ShadeMedium => {
            // Checkerboard: one dot per 2x2 block, phase alternating
            // every other row.
            for py in (0..h).step_by(2) {
                let phase = if py % 4 == 0 { 0 } else { 1 };
                for px in (phase..w).step_by(2) {
                    surface.set(x + px, y + py, fg);
                }
            }
        }
        BlockShape::ShadeDark => {
            // Inverse of ShadeLight: solid foreground with the sparse
            // dot positions punched back to the background color. With
            // bg 0 this punches opaque black over the fill.
            surface.fill_rect(x, y, w, h, fg);
            let bg = palette_color(cell.bg.get());
            for (px, py) in sparse_dots(w, h) {
                surface.set(x + px, y + py, bg);
            }
        }
    }
}

/// Dot positions for the sparse (~1/16 density) pattern: one pixel per
/// 4x4 block, column phase alternating by row pair.
fn sparse_dots(w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..h).step_by(4).flat_map(move |py| {
        let phase = ((py / 4) % 2) * 2;
        (phase..w).step_by(4).map(move |px| (px, py))
    })
}
