/*
 * QR Code generator library (Rust)
 */

//! Static lookup tables from the QR Code Model 2 standard: per-(level, version)
//! error correction block geometry, and the alphanumeric character set.

/// Number of error correction codewords per block, indexed `[level.ordinal()][version]`.
/// Index 0 of each row is a sentinel `-1` (versions are 1-based).
pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Low
    [-1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
     30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    // Medium
    [-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
     28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
    // Quartile
    [-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
     30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    // High
    [-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
     30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
];

/// Number of error correction blocks, indexed `[level.ordinal()][version]`.
/// Index 0 of each row is a sentinel `-1` (versions are 1-based).
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Low
    [-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
     13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25],
    // Medium
    [-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
     23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49],
    // Quartile
    [-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
     29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68],
    // High
    [-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
     35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81],
];

/// The set of all legal characters in alphanumeric mode, where each character's
/// value is its index within the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_sentinel_first_column() {
        for row in &ECC_CODEWORDS_PER_BLOCK {
            assert_eq!(row[0], -1);
        }
        for row in &NUM_ERROR_CORRECTION_BLOCKS {
            assert_eq!(row[0], -1);
        }
    }

    #[test]
    fn alphanumeric_charset_has_45_chars() {
        assert_eq!(ALPHANUMERIC_CHARSET.chars().count(), 45);
    }
}
