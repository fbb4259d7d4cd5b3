#![forbid(unsafe_code)]

//! Parse-time graphics state (SGR attribute tracking).
//!
//! The state is a plain value scoped to one decode call and threaded
//! through the parse loop; nothing outside the call ever observes it.
//! Color fields stay in `0..=15` at all times: out-of-range SGR codes
//! are ignored rather than applied.

/// Current foreground/background color and bold flag during a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsState {
    /// Foreground palette index (`0..=15`).
    pub fg: u8,
    /// Background palette index (`0..=15`).
    pub bg: u8,
    /// Bold/bright flag. While set, normal-intensity foreground codes
    /// select the bright half of the palette.
    pub bold: bool,
}

impl GraphicsState {
    /// The state at the start of a decode and after an SGR reset:
    /// light gray on black, not bold.
    pub const DEFAULT: Self = Self {
        fg: 7,
        bg: 0,
        bold: false,
    };

    /// Apply one SGR code. Unrecognized codes leave the state untouched.
    pub fn apply_sgr(&mut self, code: u16) {
        match code {
            0 => *self = Self::DEFAULT,
            1 => {
                self.bold = true;
                if self.fg < 8 {
                    self.fg += 8;
                }
            }
            30..=37 => {
                self.fg = (code - 30) as u8;
                if self.bold {
                    self.fg += 8;
                }
            }
            40..=47 => self.bg = (code - 40) as u8,
            90..=97 => self.fg = (code - 90) as u8 + 8,
            100..=107 => self.bg = (code - 100) as u8 + 8,
            _ => {}
        }
    }
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self::DEFAULT
    }
}
