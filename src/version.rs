/*
 * QR Code generator library (Rust)
 */

use crate::error::{QrError, QrResult};
use crate::mode::SegmentMode;
use crate::tables::{ECC_CODEWORDS_PER_BLOCK, NUM_ERROR_CORRECTION_BLOCKS};

/// A QR Code version number, checked to be in the range `[1, 40]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    /// Creates a version from a raw number, which must be in `[1, 40]`.
    pub fn new(ver: u8) -> QrResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&ver) {
            Ok(Version(ver))
        } else {
            Err(QrError::InvalidVersion(i32::from(ver)))
        }
    }

    /// Returns the version number, in `[1, 40]`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of the symbol in modules: `4 * version + 17`.
    pub fn size(self) -> i32 {
        4 * i32::from(self.0) + 17
    }
}

/// The error correction level of a QR Code symbol.
///
/// Ordinal order (used to index the lookup tables) differs from the wire
/// format bits written into the symbol: `format_bits` uses `{L:1, M:0, Q:3, H:2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QrEcc {
    Low,
    Medium,
    Quartile,
    High,
}

impl QrEcc {
    /// The four levels in ascending strength, used when scanning for the
    /// strongest level that still fits a given version.
    pub const ASCENDING: [QrEcc; 4] = [QrEcc::Low, QrEcc::Medium, QrEcc::Quartile, QrEcc::High];

    /// Returns this level's index into the table rows (0..=3).
    pub fn ordinal(self) -> usize {
        match self {
            QrEcc::Low => 0,
            QrEcc::Medium => 1,
            QrEcc::Quartile => 2,
            QrEcc::High => 3,
        }
    }

    /// Returns the 2-bit format-information code for this level.
    pub fn format_bits(self) -> u32 {
        match self {
            QrEcc::Low => 1,
            QrEcc::Medium => 0,
            QrEcc::Quartile => 3,
            QrEcc::High => 2,
        }
    }
}

/// Looks up a value from one of the per-(level, version) tables.
fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrEcc) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

/// Number of error correction blocks for `(version, level)`.
pub fn num_ec_blocks(ver: Version, ecl: QrEcc) -> usize {
    table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

/// Number of EC codewords appended to each block for `(version, level)`.
pub fn ec_codewords_per_block(ver: Version, ecl: QrEcc) -> usize {
    table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
}

/// Returns the number of data-eligible modules for `version`: the symbol's
/// total module count minus every function pattern (finders, separators,
/// timing, alignment, format, and — for version >= 7 — version information).
///
/// Version 1 has no alignment patterns and is a documented special case;
/// every other version follows the closed-form expression below, with
/// `A = floor(version / 7) + 2` counting alignment pattern tracks per axis.
pub fn total_modules(ver: Version) -> usize {
    let v = i64::from(ver.value());
    if v == 1 {
        return 208;
    }
    let a = v / 7 + 2;
    let size = 4 * v + 17;
    let mut result = size * size;
    result -= 192;
    result -= (a * a - 3) * 25;
    result -= 2 * (4 * v + 1);
    result += (a - 2) * 10;
    result -= 31;
    if v >= 7 {
        result -= 36;
    }
    result as usize
}

/// Number of 8-bit data codewords (excluding EC) available at `(version, level)`.
pub fn num_data_codewords(ver: Version, ecl: QrEcc) -> usize {
    total_modules(ver) / 8 - num_ec_blocks(ver, ecl) * ec_codewords_per_block(ver, ecl)
}

/// Returns how many characters of `mode` fit at `(version, level)`, using the
/// closed-form approximations from the QR Code capacity tables. This assumes
/// a single segment in a single mode spans the whole symbol (no mixed-mode
/// segmentation), which is this crate's only supported shape.
pub fn capacity(ver: Version, ecl: QrEcc, mode: SegmentMode) -> usize {
    let data_codewords = num_data_codewords(ver, ecl) as i64;
    let header_bits = i64::from(mode.num_char_count_bits(ver)) + 4;
    let available_bits = data_codewords * 8 - header_bits;
    if available_bits <= 0 {
        return 0;
    }
    match mode {
        SegmentMode::Numeric => {
            let r = available_bits % 10;
            let tail = if r > 6 { 2 } else if r > 3 { 1 } else { 0 };
            (available_bits / 10 * 3 + tail) as usize
        }
        SegmentMode::Alphanumeric => {
            let r = available_bits % 11;
            let tail = i64::from(r > 5);
            (available_bits / 11 * 2 + tail) as usize
        }
        SegmentMode::Byte => (available_bits / 8) as usize,
        SegmentMode::Eci | SegmentMode::Kanji => 0,
    }
}

/// Chooses the smallest version that can hold `num_chars` characters of `mode`
/// at or above `min_ecl`, opportunistically upgrading the error correction
/// level within that version (the first, and therefore strongest, level
/// tried from High down to `min_ecl` that still fits wins).
pub fn select_version_and_ecc(
    mode: SegmentMode,
    num_chars: usize,
    min_ecl: QrEcc,
) -> QrResult<(Version, QrEcc)> {
    for raw_ver in Version::MIN.value()..=Version::MAX.value() {
        let ver = Version::new(raw_ver).expect("loop bound is always in range");
        for &ecl in QrEcc::ASCENDING.iter().rev() {
            if ecl < min_ecl {
                break;
            }
            if capacity(ver, ecl, mode) >= num_chars {
                return Ok((ver, ecl));
            }
        }
    }
    Err(QrError::InputTooLong { len: num_chars })
}
