/*
 * QR Code generator library (Rust)
 */

//! Splits packed data codewords into Reed-Solomon blocks, appends each
//! block's error correction codewords, and interleaves everything into the
//! final codeword stream the matrix builder consumes.

use crate::gf256::Gf256Tables;
use crate::poly;
use crate::version::{ec_codewords_per_block, num_data_codewords, num_ec_blocks, QrEcc, Version};

/// Splits `data` into Reed-Solomon blocks, appends EC codewords to each, and
/// interleaves the result byte-by-byte across blocks (data first, then EC).
///
/// `data` must have exactly `num_data_codewords(version, ecl)` bytes.
pub fn add_ec_and_interleave(data: &[u8], version: Version, ecl: QrEcc) -> Vec<u8> {
    debug_assert_eq!(data.len(), num_data_codewords(version, ecl));

    let num_blocks = num_ec_blocks(version, ecl);
    let block_ec_len = ec_codewords_per_block(version, ecl);
    let raw_codewords = crate::version::total_modules(version) / 8;
    let short_block_len = raw_codewords / num_blocks;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;

    let gf = Gf256Tables::new();
    let generator = poly::generator(&gf, block_ec_len);

    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut offset = 0usize;
    for block_index in 0..num_blocks {
        let data_len = short_block_len - block_ec_len + usize::from(block_index >= num_short_blocks);
        let block_data = &data[offset..offset + data_len];
        offset += data_len;

        let mut dividend = block_data.to_vec();
        dividend.extend(std::iter::repeat(0u8).take(block_ec_len));
        let ec = poly::remainder(&gf, &dividend, &generator);

        let mut block = block_data.to_vec();
        if block_index < num_short_blocks {
            block.push(0); // sentinel slot skipped during interleave, never emitted
        }
        block.extend_from_slice(&ec);
        blocks.push(block);
    }
    debug_assert_eq!(offset, data.len());

    let mut result = Vec::with_capacity(raw_codewords);
    let longest = blocks.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..longest {
        for (j, block) in blocks.iter().enumerate() {
            if i == short_block_len - block_ec_len && j < num_short_blocks {
                continue;
            }
            result.push(block[i]);
        }
    }
    debug_assert_eq!(result.len(), raw_codewords);
    result
}
