//! One display row: `offset: hex  ascii`.

use std::fmt;

use super::make_padding;
use crate::viewport::LINE_WIDTH;

/// Width of the hex column for a full line: a space before every pair of
/// bytes plus two digits per byte.
pub const HEX_COLUMN_WIDTH: usize = LINE_WIDTH / 2 + LINE_WIDTH * 2;

/// Bytes as lowercase hex, a space in front of every even-indexed byte.
pub struct HexColumn<'a>(pub &'a [u8]);

impl fmt::Display for HexColumn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i % 2 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

pub struct AsciiColumn<'a>(pub &'a [u8]);

impl fmt::Display for AsciiColumn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &byte in self.0 {
            write!(f, "{}", ascii_repr(byte))?;
        }
        Ok(())
    }
}

/// Printable ASCII other than space shows as itself, everything else as `.`.
pub fn ascii_repr(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        char::from(byte)
    } else {
        '.'
    }
}

/// Formats `chunk`, found at `offset` in the file, as one row.
///
/// A short final chunk has its hex column padded so the ASCII column lines up
/// with the rows above it.
pub fn format_line(offset: u64, chunk: &[u8]) -> String {
    let hex = HexColumn(chunk).to_string();
    let padding = make_padding(HEX_COLUMN_WIDTH.saturating_sub(hex.len()));
    format!("{:08x}:{}{}  {}", offset, hex, padding, AsciiColumn(chunk))
}
