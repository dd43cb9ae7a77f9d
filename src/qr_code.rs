/*
 * QR Code generator library (Rust)
 */

//! The public facade: orchestrates classify -> select -> encode -> EC and
//! interleave -> build matrix -> mask, and exposes the finished symbol.

use tracing::{debug, trace};

use crate::blocks::add_ec_and_interleave;
use crate::error::QrResult;
use crate::matrix::{Grid, Mask};
use crate::mode::{classify, SegmentMode};
use crate::segment::encode_codewords;
use crate::version::{num_data_codewords, select_version_and_ecc, QrEcc, Version};

/// A fully built QR Code Model 2 symbol: an immutable module grid plus the
/// metadata that produced it.
#[derive(Debug)]
pub struct QrCode {
    version: Version,
    error_correction_level: QrEcc,
    mode: SegmentMode,
    mask: Mask,
    size: i32,
    modules: Vec<bool>,
}

impl QrCode {
    /// Classifies, encodes, and renders `text` into a symbol meeting at least
    /// `min_ecc`. `mask_index` outside `[0, 7]` is silently clamped to 0.
    pub fn encode_text(text: &str, min_ecc: QrEcc, mask_index: i32) -> QrResult<Self> {
        let mode = classify(text)?;
        debug!(?mode, "classified input");

        let num_chars = crate::segment::num_chars_for_mode(text, mode);
        let (version, ecl) = select_version_and_ecc(mode, num_chars, min_ecc)?;
        debug!(version = version.value(), ?ecl, "selected version and error correction level");

        let data_codewords = num_data_codewords(version, ecl);
        let packed = encode_codewords(text, mode, version, data_codewords)?;
        trace!(bytes = packed.len(), "packed segment bits");

        let interleaved = add_ec_and_interleave(&packed, version, ecl);
        trace!(bytes = interleaved.len(), "appended error correction and interleaved");

        let mask = Mask::new(mask_index).unwrap_or(Mask::new(0).expect("0 is always a valid mask index"));

        let mut grid = Grid::new(version);
        grid.draw_function_patterns(version, ecl, mask);
        trace!("drew function patterns");
        grid.place_codewords(&interleaved);
        trace!("placed codewords in zig-zag order");
        grid.apply_mask(mask);
        trace!(mask = mask.value(), "applied data mask");

        let size = grid.size();
        Ok(QrCode {
            version,
            error_correction_level: ecl,
            mode,
            mask,
            size,
            modules: grid.into_modules(),
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn error_correction_level(&self) -> QrEcc {
        self.error_correction_level
    }

    /// The 4-bit mode indicator value written into the symbol (1/2/4 for
    /// Numeric/Alphanumeric/Byte; ECI and Kanji are never selected).
    pub fn mode_bits(&self) -> u32 {
        self.mode.mode_bits()
    }

    pub fn mask_index(&self) -> u8 {
        self.mask.value()
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns whether the module at `(x, y)` is dark. Panics if out of bounds.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        assert!((0..self.size).contains(&x) && (0..self.size).contains(&y), "module coordinate out of range");
        self.modules[(y * self.size + x) as usize]
    }
}
