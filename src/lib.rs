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

//! A QR Code Model 2 symbol generator.
//!
//! Turns a character string into a square boolean module matrix conforming
//! to the QR Code Model 2 standard, versions 1 through 40. The pipeline is:
//! classify the input's mode, select the smallest version and the strongest
//! affordable error correction level, bit-encode and pad the payload,
//! compute and interleave Reed-Solomon error correction codewords, draw
//! function patterns onto the grid, place codewords in zig-zag order, and
//! apply the caller-chosen data mask.
//!
//! Rendering the resulting matrix to a terminal, image, or any other medium
//! is left to the caller; this crate only builds the matrix and metadata.
//!
//! ECI segments, Kanji mode, mixed-mode segmentation, and automatic
//! mask-penalty selection are out of scope: a single mode is chosen for the
//! whole input and the caller always supplies a mask index.

mod blocks;
mod error;
mod gf256;
mod matrix;
mod mode;
mod poly;
mod qr_code;
mod segment;
mod tables;
mod version;

pub use error::{QrError, QrResult};
pub use matrix::Mask;
pub use mode::SegmentMode;
pub use qr_code::QrCode;
pub use version::{QrEcc, Version};
