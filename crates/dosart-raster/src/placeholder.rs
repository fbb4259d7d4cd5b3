#![forbid(unsafe_code)]

//! Placeholder bitmap for unparsable art.
//!
//! When decoding yields nothing renderable the caller still receives a
//! valid texture: a magenta tile with a bright border and a centered
//! question mark. Deliberately loud so a missing or corrupt art file is
//! obvious in-scene rather than invisibly absent.

use crate::color::{PALETTE, PackedRgba};
use crate::surface::PixelSurface;

/// Border thickness and inset, in pixels.
const BORDER: u32 = 2;

/// 5x7 question-mark glyph, one row per byte, bit 4 = leftmost pixel.
/// The pipeline is font-free, so the fallback glyph is too.
const QUESTION_MARK: [u8; 7] = [
    0b01110, //  ###
    0b10001, // #   #
    0b00001, //     #
    0b00010, //    #
    0b00100, //   #
    0b00000, //
    0b00100, //   #
];

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

/// Build the fixed placeholder bitmap at the requested size.
///
/// Magenta fill, bright-magenta inset border, centered white `?`. The
/// border and glyph are skipped when the surface is too small to hold
/// them; the fill alone still makes the tile unmistakable.
///
/// # Panics
///
/// Panics if either dimension is 0 (surface precondition).
#[must_use]
pub fn placeholder(width: u32, height: u32) -> PixelSurface {
    let mut surface = PixelSurface::new(width, height);
    surface.fill_rect(0, 0, width, height, PALETTE[5]);

    if width > 4 * BORDER && height > 4 * BORDER {
        draw_border(&mut surface, PALETTE[13]);
    }
    if width >= GLYPH_W && height >= GLYPH_H {
        draw_glyph(&mut surface, PALETTE[15]);
    }
    surface
}

/// Bordered inset rectangle, `BORDER` pixels thick.
fn draw_border(surface: &mut PixelSurface, color: PackedRgba) {
    let w = surface.width();
    let h = surface.height();
    let inner_w = w - 2 * BORDER;
    let inner_h = h - 2 * BORDER;
    surface.fill_rect(BORDER, BORDER, inner_w, BORDER, color);
    surface.fill_rect(BORDER, h - 2 * BORDER, inner_w, BORDER, color);
    surface.fill_rect(BORDER, BORDER, BORDER, inner_h, color);
    surface.fill_rect(w - 2 * BORDER, BORDER, BORDER, inner_h, color);
}

/// Blit the question mark centered on the surface.
fn draw_glyph(surface: &mut PixelSurface, color: PackedRgba) {
    let gx = (surface.width() - GLYPH_W) / 2;
    let gy = (surface.height() - GLYPH_H) / 2;
    for (row, &mask) in QUESTION_MARK.iter().enumerate() {
        for col in 0..GLYPH_W {
            if mask & (1 << (GLYPH_W - 1 - col)) != 0 {
                surface.set(gx + col, gy + row as u32, color);
            }
        }
    }
}
