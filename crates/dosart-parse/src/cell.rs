#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A decoded art file is a grid of [`Cell`]s. Each cell carries a block
//! shape and a foreground/background palette index, nothing else: this
//! pipeline renders DOS art as colored pixel blocks rather than glyphs,
//! so the ~250 CP437 code points collapse into nine shapes.
//!
//! # Invariants
//!
//! 1. `Cell` is exactly 3 bytes (verified by compile-time assert)
//! 2. A [`ColorIndex`] is always in `0..=15`; an out-of-range palette
//!    lookup cannot be constructed from a decoded cell

/// One of the nine block shapes a character cell can rasterize to.
///
/// The set is closed: shape dispatch in the rasterizer is an exhaustive
/// `match`, so adding a variant is a compile error until every consumer
/// handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockShape {
    /// Nothing painted in the foreground (background may still fill).
    #[default]
    Empty,
    /// Entire cell filled with the foreground color.
    Full,
    /// Upper half filled (CP437 223, `▀`).
    TopHalf,
    /// Lower half filled (CP437 220, `▄`).
    BottomHalf,
    /// Left half filled (CP437 221, `▌`).
    LeftHalf,
    /// Right half filled (CP437 222, `▐`).
    RightHalf,
    /// Sparse dot pattern, ~1/16 density (CP437 176, `░`).
    ShadeLight,
    /// Checkerboard, ~1/4 density (CP437 177, `▒`).
    ShadeMedium,
    /// Solid fill with background dots punched back in (CP437 178, `▓`).
    ShadeDark,
}

impl BlockShape {
    /// Map a CP437 byte to its block shape.
    ///
    /// Only the block-drawing characters carry visual weight in a
    /// pixel-block rendering scheme; every other printable byte becomes
    /// a solid block and everything at or below space becomes empty.
    #[must_use]
    pub const fn from_cp437(byte: u8) -> Self {
        match byte {
            32 => Self::Empty,
            219 => Self::Full,
            220 => Self::BottomHalf,
            221 => Self::LeftHalf,
            222 => Self::RightHalf,
            223 => Self::TopHalf,
            176 => Self::ShadeLight,
            177 => Self::ShadeMedium,
            178 => Self::ShadeDark,
            254 => Self::Full,
            b if b > 32 => Self::Full,
            _ => Self::Empty,
        }
    }
}

/// A palette index, guaranteed in `0..=15`.
///
/// The 16-color text-mode palette is the only color space in this
/// pipeline; holding the index in a checked newtype means the
/// rasterizer's palette lookup can never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Largest valid palette index.
    pub const MAX: u8 = 15;

    /// Black, the default background. Treated as transparent by the
    /// rasterizer so decoded art composites over a scene background.
    pub const BLACK: Self = Self(0);

    /// Light gray, the default foreground.
    pub const LIGHT_GRAY: Self = Self(7);

    /// Create a palette index, rejecting values above [`Self::MAX`].
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= Self::MAX { Some(Self(raw)) } else { None }
    }

    /// Create a palette index from a value already known to be in range.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `raw > MAX`.
    #[inline]
    pub(crate) const fn new_masked(raw: u8) -> Self {
        debug_assert!(raw <= Self::MAX, "palette index overflow");
        Self(raw & Self::MAX)
    }

    /// The raw index value (`0..=15`).
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// A single decoded cell (3 bytes).
///
/// Immutable once produced by the parser; owned by the row it belongs
/// to inside a [`CellGrid`](crate::grid::CellGrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Block shape to rasterize.
    pub shape: BlockShape,
    /// Foreground palette index.
    pub fg: ColorIndex,
    /// Background palette index (0 renders as transparent).
    pub bg: ColorIndex,
}

// Compile-time size check
const _: () = assert!(core::mem::size_of::<Cell>() == 3);

impl Cell {
    /// Create a cell from its parts.
    #[inline]
    #[must_use]
    pub const fn new(shape: BlockShape, fg: ColorIndex, bg: ColorIndex) -> Self {
        Self { shape, fg, bg }
    }

    /// An empty cell carrying the given colors (used for spacing runs).
    #[inline]
    #[must_use]
    pub const fn empty(fg: ColorIndex, bg: ColorIndex) -> Self {
        Self::new(BlockShape::Empty, fg, bg)
    }
}


#[cfg(test)]
mod cell_proptests {
    use super::{BlockShape, ColorIndex};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_byte_maps_to_some_shape(byte in any::<u8>()) {
            // No byte may panic or fall outside the nine-shape set.
            let shape = BlockShape::from_cp437(byte);
            let known = matches!(
                shape,
                BlockShape::Empty
                    | BlockShape::Full
                    | BlockShape::TopHalf
                    | BlockShape::BottomHalf
                    | BlockShape::LeftHalf
                    | BlockShape::RightHalf
                    | BlockShape::ShadeLight
                    | BlockShape::ShadeMedium
                    | BlockShape::ShadeDark
            );
            prop_assert!(known);
        }

        #[test]
        fn color_index_new_matches_range_check(raw in any::<u8>()) {
            prop_assert_eq!(ColorIndex::new(raw).is_some(), raw <= ColorIndex::MAX);
        }
    }
}
