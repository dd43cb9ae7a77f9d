/*
 * QR Code generator library (Rust)
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the "Software"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 * - The above copyright notice and this permission notice shall be included in
 *   all copies or substantial portions of the Software.
 * - The Software is provided "as is", without warranty of any kind, express or
 *   implied, including but not limited to the warranties of merchantability,
 *   fitness for a particular purpose and noninfringement. In no event shall the
 *   authors or copyright holders be liable for any claim, damages or other
 *   liability, whether in an action of contract, tort or otherwise, arising from,
 *   out of or in connection with the Software or the use or other dealings in the
 *   Software.
 */

use thiserror::Error;

/// Everything that can go wrong while building a QR Code symbol.
///
/// All errors are reported synchronously at construction time; there is no
/// partial symbol to recover and nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// No version from 1 to 40 can hold the input at the requested error correction floor.
    #[error("input too long: {len} characters exceed the capacity of every version at the requested error correction level")]
    InputTooLong {
        /// Length of the input, in characters (for text) or bytes (for binary data).
        len: usize,
    },

    /// The chosen segment mode encountered a character outside its alphabet.
    ///
    /// This should never happen if mode classification ran first; it indicates
    /// an internal invariant breach rather than a normal user-facing failure.
    #[error("character {0:?} is not encodable in the selected segment mode")]
    UnsupportedCharacter(char),

    /// A mask index outside `[0, 7]` reached the masking stage.
    ///
    /// The public constructor clamps out-of-range mask arguments to 0 before the
    /// pipeline runs, so this is only reachable via the low-level `Mask` constructor.
    #[error("mask index {0} is out of range, must be 0..=7")]
    InvalidMask(i32),

    /// An error correction level value did not map to one of the four known levels.
    ///
    /// Unreachable through the public API: `QrEcc` is a 4-variant enum, so every
    /// value of the type is already one of the four levels. Kept for parity with
    /// the specification's error taxonomy.
    #[error("invalid error correction level")]
    InvalidEcLevel,

    /// A version number outside `[1, 40]` reached a table lookup.
    ///
    /// Unreachable through the public API: `Version` is a range-checked newtype.
    /// Kept for parity with the specification's error taxonomy.
    #[error("version number {0} is out of range, must be 1..=40")]
    InvalidVersion(i32),
}

/// Convenience alias used throughout the pipeline.
pub type QrResult<T> = Result<T, QrError>;
