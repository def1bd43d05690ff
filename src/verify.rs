//! Structural completeness diagnostic for a generated family.
//!
//! Every unordered triple of distinct variables {a, b, c} should be
//! recoverable from some pair of polynomials that intersect in exactly
//! one monomial pair touching exactly those three variables. The check
//! collects the distinct recovered triples and compares their count
//! against C(n, 3).
//!
//! This is a diagnostic on the algebraic design, not part of the
//! default search path.

use std::collections::BTreeSet;

use log::debug;
use num_bigint::BigUint;

use crate::counting::expected_triples;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;

/// Scans every ordered pair of distinct polynomials and collects the
/// variable triples recovered from unique intersections.
pub fn reconstructed_triples(polys: &[Polynomial]) -> BTreeSet<(usize, usize, usize)> {
    let mut triples = BTreeSet::new();

    for poly1 in polys {
        for poly2 in polys {
            if poly1 == poly2 {
                continue;
            }
            if let Some(triple) = recover_triple(poly1, poly2) {
                triples.insert(triple);
            }
        }
    }

    debug!("verify: reconstructed {} triples", triples.len());
    triples
}

/// True iff the family recovers every triple of distinct variables,
/// i.e. the reconstructed set has exactly C(n, 3) members.
pub fn check_construction(n: usize, polys: &[Polynomial]) -> bool {
    let triples = reconstructed_triples(polys);
    BigUint::from(triples.len()) == expected_triples(n)
}

/// Recovers the variable triple of a polynomial pair, if the pair
/// intersects in exactly one monomial pair covering three distinct
/// variables.
fn recover_triple(poly1: &Polynomial, poly2: &Polynomial) -> Option<(usize, usize, usize)> {
    let mut intersections = 0;
    let mut recovered = None;

    'scan: for &m1 in poly1.monomials() {
        for &m2 in poly2.monomials() {
            if !m1.intersects(m2) {
                continue;
            }
            intersections += 1;
            if intersections > 1 {
                break 'scan;
            }
            recovered = third_variable(m1, m2).map(|c| sorted_triple(m1.x(), m1.y(), c));
        }
    }

    if intersections == 1 {
        recovered
    } else {
        None
    }
}

/// The variable of `m2` not occurring in `m1`, if the two intersecting
/// monomials cover three distinct variables.
fn third_variable(m1: Monomial, m2: Monomial) -> Option<usize> {
    if m1.x() == m1.y() {
        return None;
    }
    if !m1.contains(m2.x()) {
        Some(m2.x())
    } else if !m1.contains(m2.y()) {
        Some(m2.y())
    } else {
        None
    }
}

fn sorted_triple(a: usize, b: usize, c: usize) -> (usize, usize, usize) {
    let mut t = [a, b, c];
    t.sort();
    (t[0], t[1], t[2])
}
