//! GF(2) sums of degree-2 monomials.

use std::fmt;

use crate::monomial::Monomial;
use crate::point::Point;

/// A polynomial over GF(2): the XOR of its monomials.
///
/// The monomial list is kept normalized: sorted canonically, with equal
/// monomials cancelled in pairs (m + m = 0 over GF(2)). Two polynomials
/// compare equal iff their normalized lists are equal.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Polynomial {
    monomials: Vec<Monomial>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Polynomial::default()
    }

    /// Creates a polynomial from a list of monomials, normalizing it.
    pub fn from_monomials(monomials: Vec<Monomial>) -> Self {
        Polynomial {
            monomials: normalize(monomials),
        }
    }

    /// Returns the normalized monomial list.
    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// Returns the number of monomials.
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// True iff this is the zero polynomial.
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// GF(2) sum of two polynomials.
    ///
    /// Monomials appearing in both operands cancel.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut monomials = self.monomials.clone();
        monomials.extend_from_slice(&other.monomials);
        Polynomial {
            monomials: normalize(monomials),
        }
    }

    /// Evaluates the polynomial at `point`.
    ///
    /// The value is the XOR over all monomials of
    /// `point[x] & point[y]`, so it does not depend on monomial order.
    pub fn evaluate(&self, point: &Point) -> bool {
        let mut value = false;
        for mon in &self.monomials {
            value ^= point.get(mon.x()) & point.get(mon.y());
        }
        value
    }
}

/// Sorts canonically and cancels equal monomials in pairs.
fn normalize(mut monomials: Vec<Monomial>) -> Vec<Monomial> {
    monomials.sort();
    let mut result: Vec<Monomial> = Vec::with_capacity(monomials.len());
    for mon in monomials {
        if result.last() == Some(&mon) {
            result.pop();
        } else {
            result.push(mon);
        }
    }
    result
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mon in &self.monomials {
            write!(f, "{}+", mon)?;
        }
        Ok(())
    }
}
