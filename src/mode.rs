/*
 * QR Code generator library (Rust)
 */

use crate::error::{QrError, QrResult};
use crate::tables::ALPHANUMERIC_CHARSET;
use crate::version::Version;

/// The mode indicator of a segment.
///
/// `Eci` and `Kanji` are reserved wire values that this crate never selects
/// during classification; a single mode is always chosen for the entire input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Eci,
    Kanji,
}

impl SegmentMode {
    /// Returns the 4-bit mode indicator value written into the symbol.
    pub fn mode_bits(self) -> u32 {
        match self {
            SegmentMode::Numeric => 0x1,
            SegmentMode::Alphanumeric => 0x2,
            SegmentMode::Byte => 0x4,
            SegmentMode::Eci => 0x7,
            SegmentMode::Kanji => 0x8,
        }
    }

    /// Returns the bit width of the character count field for this mode at the
    /// given version: 1-9, 10-26, and 27-40 each carry their own width.
    pub fn num_char_count_bits(self, ver: Version) -> u8 {
        let widths: [u8; 3] = match self {
            SegmentMode::Numeric => [10, 12, 14],
            SegmentMode::Alphanumeric => [9, 11, 13],
            SegmentMode::Byte => [8, 16, 16],
            SegmentMode::Kanji => [8, 10, 12],
            SegmentMode::Eci => [0, 0, 0],
        };
        let v = ver.value();
        if v <= 9 {
            widths[0]
        } else if v <= 26 {
            widths[1]
        } else {
            widths[2]
        }
    }
}

/// Tests whether every character of `text` is an ASCII digit.
pub fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Tests whether every character of `text` is in the 45-character alphanumeric set.
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

/// Tests whether every character of `text` is an ASCII printable byte mode can carry.
pub fn is_byte_encodable(text: &str) -> bool {
    text.chars().all(|c| (' '..='~').contains(&c))
}

/// Classifies `text` into the smallest-capacity mode that can represent it:
/// Numeric, then Alphanumeric, then Byte. Kanji and ECI are never selected.
///
/// The empty string classifies as Numeric (the narrowest mode), matching the
/// convention that an empty payload still needs some mode to build a valid
/// (if minimal) symbol.
pub fn classify(text: &str) -> QrResult<SegmentMode> {
    if is_numeric(text) {
        Ok(SegmentMode::Numeric)
    } else if is_alphanumeric(text) {
        Ok(SegmentMode::Alphanumeric)
    } else if is_byte_encodable(text) {
        Ok(SegmentMode::Byte)
    } else {
        let bad = text
            .chars()
            .find(|&c| !(' '..='~').contains(&c))
            .unwrap_or('\0');
        Err(QrError::UnsupportedCharacter(bad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_numeric() {
        assert_eq!(classify("0123456789").unwrap(), SegmentMode::Numeric);
    }

    #[test]
    fn classifies_alphanumeric() {
        assert_eq!(classify("HELLO WORLD").unwrap(), SegmentMode::Alphanumeric);
    }

    #[test]
    fn classifies_byte() {
        assert_eq!(classify("Hello, world!").unwrap(), SegmentMode::Byte);
    }

    #[test]
    fn empty_string_is_numeric() {
        assert_eq!(classify("").unwrap(), SegmentMode::Numeric);
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(classify("héllo").is_err());
    }

    #[test]
    fn mode_bits_match_standard_values() {
        assert_eq!(SegmentMode::Numeric.mode_bits(), 1);
        assert_eq!(SegmentMode::Alphanumeric.mode_bits(), 2);
        assert_eq!(SegmentMode::Byte.mode_bits(), 4);
        assert_eq!(SegmentMode::Eci.mode_bits(), 7);
        assert_eq!(SegmentMode::Kanji.mode_bits(), 8);
    }
}
