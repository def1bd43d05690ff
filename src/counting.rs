//! Combinatorial counting helpers.

use num_bigint::{BigUint, ToBigUint};

/// Binomial coefficient C(n, k).
///
/// The running product stays integral: after `i` steps it equals
/// C(n, i + 1).
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = 1.to_biguint().unwrap();
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// Number of unordered triples of distinct variables, C(n, 3).
pub fn expected_triples(n: usize) -> BigUint {
    binomial(n, 3)
}
