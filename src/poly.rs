/*
 * QR Code generator library (Rust)
 */

//! Polynomial arithmetic over GF(256), used to build Reed-Solomon generator
//! polynomials and to compute the remainder (the error correction codewords).
//!
//! Polynomials are represented as byte slices/vectors in order of descending
//! power, i.e. index 0 holds the highest-order coefficient.

use crate::gf256::Gf256Tables;

/// Returns the product of two polynomials over GF(256).
///
/// The result has length `p.len() + q.len() - 1` (or is empty if either input is).
pub fn multiply(gf: &Gf256Tables, p: &[u8], q: &[u8]) -> Vec<u8> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0u8; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        if pi == 0 {
            continue;
        }
        for (k, &qk) in q.iter().enumerate() {
            result[i + k] ^= gf.multiply(pi, qk);
        }
    }
    result
}

/// Returns the remainder of `dividend` divided by `divisor` over GF(256).
///
/// `divisor` must be monic-free in the sense used here (its leading coefficient
/// need not be 1, but must be nonzero). The result has length `divisor.len() - 1`.
pub fn remainder(gf: &Gf256Tables, dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    assert!(!divisor.is_empty(), "divisor must be nonempty");
    assert!(divisor[0] != 0, "divisor must have a nonzero leading coefficient");
    let mut r = dividend.to_vec();
    let steps = dividend.len().saturating_sub(divisor.len()) + 1;
    for _ in 0..steps {
        if r.is_empty() {
            break;
        }
        if r[0] != 0 {
            let factor = gf.divide(r[0], divisor[0]);
            for (i, &d) in divisor.iter().enumerate() {
                r[i] ^= gf.multiply(d, factor);
            }
        }
        r.remove(0);
    }
    // r may be longer than divisor.len() - 1 if dividend was shorter than
    // expected; the QR pipeline always calls this with dividend.len() >= divisor.len(),
    // leaving exactly divisor.len() - 1 coefficients.
    r
}

/// Returns the degree-`degree` Reed-Solomon generator polynomial
/// `(x - a^0)(x - a^1)...(x - a^{degree-1})` over GF(256), with `a = 0x02`.
///
/// The leading coefficient (always 1) is included, so the result has
/// `degree + 1` coefficients in descending-power order.
pub fn generator(gf: &Gf256Tables, degree: usize) -> Vec<u8> {
    assert!((1..=255).contains(&degree), "degree out of range");
    let mut coeffs = vec![1u8];
    let mut root: u8 = 1;
    for _ in 0..degree {
        coeffs = multiply(gf, &coeffs, &[1, root]);
        root = gf.multiply(root, 0x02);
    }
    coeffs
}
