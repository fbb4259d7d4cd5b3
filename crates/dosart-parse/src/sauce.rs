#![forbid(unsafe_code)]

//! Content-boundary detection.
//!
//! DOS-era art files often end with a SAUCE metadata trailer and/or a
//! 0x1A EOF marker. Neither is visual content, so parsing must stop at
//! whichever appears first. Both only ever sit near the end of the
//! file, so the scan is bounded to the trailing window rather than the
//! whole buffer.

use memchr::{memchr, memmem};

/// Size of the trailing window scanned for a SAUCE marker or EOF byte.
pub const TRAILER_SCAN_WINDOW: usize = 200;

/// EOF marker byte (DOS Ctrl-Z).
pub const EOF_MARKER: u8 = 0x1A;

/// Literal that introduces a SAUCE metadata trailer.
const SAUCE_MARKER: &[u8] = b"SAUCE";

/// Find the exclusive end of visual content in `bytes`.
///
/// Scans the last [`TRAILER_SCAN_WINDOW`] bytes for the `SAUCE` literal
/// or an [`EOF_MARKER`]; the earliest hit wins. Marker positions must
/// leave room for a full 5-byte literal before the buffer end, so a
/// buffer shorter than 5 bytes degrades to "no marker found" and the
/// whole buffer is content.
#[must_use]
pub fn content_end(bytes: &[u8]) -> usize {
    let limit = bytes.len().saturating_sub(SAUCE_MARKER.len());
    let start = bytes.len().saturating_sub(TRAILER_SCAN_WINDOW);
    if start >= limit {
        return bytes.len();
    }

    let sauce = memmem::find(&bytes[start..], SAUCE_MARKER)
        .map(|pos| pos + start)
        .filter(|&pos| pos < limit);
    let eof = memchr(EOF_MARKER, &bytes[start..limit]).map(|pos| pos + start);

    match (sauce, eof) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => bytes.len(),
    }
}
