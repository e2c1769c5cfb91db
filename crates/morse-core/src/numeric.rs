//! Numeric encodings: Fibonacci prefix and prime factorizations of
//! character codes.

use alloc::vec;
use alloc::vec::Vec;

/// First `length` Fibonacci numbers, starting `1, 1`.
///
/// Terms that would overflow `u64` are not produced.
#[must_use]
pub fn fibonacci(length: usize) -> Vec<u64> {
    match length {
        0 => Vec::new(),
        1 => vec![1],
        _ => {
            let mut seq = Vec::with_capacity(length);
            seq.push(1u64);
            seq.push(1u64);
            while seq.len() < length {
                let n = seq.len();
                match seq[n - 1].checked_add(seq[n - 2]) {
                    Some(next) => seq.push(next),
                    None => break,
                }
            }
            seq
        }
    }
}

/// Prime factors of `num` in ascending order, with multiplicity.
///
/// `0` and `1` have no factors.
#[must_use]
pub fn prime_factors(num: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    if num < 2 {
        return factors;
    }

    let mut rest = num;
    let mut d = 2u32;
    while u64::from(d) * u64::from(d) <= u64::from(rest) {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

/// Prime factors of each character's code point.
#[must_use]
pub fn text_to_prime_factors(text: &str) -> Vec<Vec<u32>> {
    text.chars().map(|ch| prime_factors(u32::from(ch))).collect()
}
