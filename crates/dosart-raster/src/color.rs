#![forbid(unsafe_code)]

//! Packed RGBA color and the fixed 16-color text-mode palette.

/// A compact RGBA color.
///
/// - **Size:** 4 bytes.
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
///
/// Straight alpha storage. The pipeline never blends: pixels are either
/// written opaque from the palette or left at [`Self::TRANSPARENT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// The classic 16-color text-mode palette (CGA/ANSI ordering: the low
/// eight are normal intensity, the high eight are bright).
pub const PALETTE: [PackedRgba; 16] = [
    PackedRgba::rgb(0x00, 0x00, 0x00), // 0: black
    PackedRgba::rgb(0xaa, 0x00, 0x00), // 1: red
    PackedRgba::rgb(0x00, 0xaa, 0x00), // 2: green
    PackedRgba::rgb(0xaa, 0x55, 0x00), // 3: brown
    PackedRgba::rgb(0x00, 0x00, 0xaa), // 4: blue
    PackedRgba::rgb(0xaa, 0x00, 0xaa), // 5: magenta
    PackedRgba::rgb(0x00, 0xaa, 0xaa), // 6: cyan
    PackedRgba::rgb(0xaa, 0xaa, 0xaa), // 7: light gray
    PackedRgba::rgb(0x55, 0x55, 0x55), // 8: dark gray
    PackedRgba::rgb(0xff, 0x55, 0x55), // 9: bright red
    PackedRgba::rgb(0x55, 0xff, 0x55), // 10: bright green
    PackedRgba::rgb(0xff, 0xff, 0x55), // 11: yellow
    PackedRgba::rgb(0x55, 0x55, 0xff), // 12: bright blue
    PackedRgba::rgb(0xff, 0x55, 0xff), // 13: bright magenta
    PackedRgba::rgb(0x55, 0xff, 0xff), // 14: bright cyan
    PackedRgba::rgb(0xff, 0xff, 0xff), // 15: white
];

/// Mid-gray fallback for palette lookups with a raw out-of-range index.
pub const MID_GRAY: PackedRgba = PackedRgba::rgb(0xaa, 0xaa, 0xaa);

/// Look up a palette color by raw index, falling back to [`MID_GRAY`]
/// for indices past the palette end.
#[inline]
#[must_use]
pub const fn palette_color(index: u8) -> PackedRgba {
    if (index as usize) < PALETTE.len() {
        PALETTE[index as usize]
    } else {
        MID_GRAY
    }
}
