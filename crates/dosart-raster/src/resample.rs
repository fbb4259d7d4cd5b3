#![forbid(unsafe_code)]

//! Nearest-neighbor resampling.
//!
//! Block art lives and dies by hard edges, so scaling uses pure
//! nearest-neighbor sampling: every output pixel is a copy of exactly
//! one source pixel, never a blend. The output therefore contains only
//! colors already present in the source (plus transparent where the
//! source was transparent).

use crate::color::PackedRgba;
use crate::surface::PixelSurface;

/// Resample `src` into a new surface of `target_w`×`target_h` pixels.
///
/// Source coordinates are `floor(t * src_dim / target_dim)`, the plain
/// fixed-point nearest-neighbor mapping.
///
/// # Panics
///
/// Panics if either target dimension is 0 (surface precondition).
#[must_use]
pub fn resample_nearest(src: &PixelSurface, target_w: u32, target_h: u32) -> PixelSurface {
    let mut out = PixelSurface::new(target_w, target_h);
    let src_w = u64::from(src.width());
    let src_h = u64::from(src.height());

    for ty in 0..target_h {
        let sy = (u64::from(ty) * src_h / u64::from(target_h)) as u32;
        for tx in 0..target_w {
            let sx = (u64::from(tx) * src_w / u64::from(target_w)) as u32;
            let pixel = src.get(sx, sy).unwrap_or(PackedRgba::TRANSPARENT);
            out.set(tx, ty, pixel);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::resample_nearest;
    use crate::color::{PALETTE, PackedRgba};
    use crate::surface::PixelSurface;

    /// 2x2 source with four distinct palette colors.
    fn quad_source() -> PixelSurface {
        let mut src = PixelSurface::new(2, 2);
        src.set(0, 0, PALETTE[1]);
        src.set(1, 0, PALETTE[2]);
        src.set(0, 1, PALETTE[4]);
        src.set(1, 1, PALETTE[15]);
        src
    }

    #[test]
    fn identity_resample_copies_pixels() {
        let src = quad_source();
        let out = resample_nearest(&src, 2, 2);
        assert_eq!(out, src);
    }

    #[test]
    fn upscale_replicates_quadrants() {
        let out = resample_nearest(&quad_source(), 4, 4);
        for (x, y, expect) in [
            (0, 0, PALETTE[1]),
            (1, 1, PALETTE[1]),
            (2, 0, PALETTE[2]),
            (3, 1, PALETTE[2]),
            (0, 2, PALETTE[4]),
            (1, 3, PALETTE[4]),
            (2, 2, PALETTE[15]),
            (3, 3, PALETTE[15]),
        ] {
            assert_eq!(out.get(x, y), Some(expect), "pixel ({x},{y})");
        }
    }

    #[test]
    fn downscale_samples_top_left_of_each_region() {
        let mut src = PixelSurface::new(4, 4);
        src.fill_rect(0, 0, 4, 4, PALETTE[4]);
        src.set(0, 0, PALETTE[9]);
        src.set(2, 0, PALETTE[10]);
        src.set(0, 2, PALETTE[11]);
        src.set(2, 2, PALETTE[12]);

        let out = resample_nearest(&src, 2, 2);
        assert_eq!(out.get(0, 0), Some(PALETTE[9]));
        assert_eq!(out.get(1, 0), Some(PALETTE[10]));
        assert_eq!(out.get(0, 1), Some(PALETTE[11]));
        assert_eq!(out.get(1, 1), Some(PALETTE[12]));
    }

    #[test]
    fn output_colors_are_a_subset_of_source_colors() {
        // No anti-aliasing: resampling must never synthesize colors.
        let src = quad_source();
        for (tw, th) in [(1, 1), (3, 5), (7, 7), (16, 2)] {
            let out = resample_nearest(&src, tw, th);
            for &pixel in out.pixels() {
                assert!(
                    src.pixels().contains(&pixel) || pixel == PackedRgba::TRANSPARENT,
                    "{tw}x{th} output synthesized color {pixel:?}"
                );
            }
        }
    }

    #[test]
    fn transparent_source_pixels_stay_transparent() {
        let mut src = PixelSurface::new(2, 1);
        src.set(0, 0, PALETTE[15]);
        // (1, 0) stays transparent.
        let out = resample_nearest(&src, 8, 4);
        assert_eq!(out.get(0, 0), Some(PALETTE[15]));
        assert_eq!(out.get(7, 3), Some(PackedRgba::TRANSPARENT));
    }
}
