//! Construction of the polynomial family for a grid.
//!
//! The family has three layers:
//!
//! - a fixed collection of **coordinate subsets** of `[0, r)`, cut out
//!   by 3-bit patterns at low bit positions, which control how many and
//!   which monomials each paired-index polynomial contains;
//! - **paired-index polynomials**: for every ordered pair of distinct
//!   indices and every cyclic shift, one row-type and one column-type
//!   polynomial per coordinate subset;
//! - **quadratics**: one single-monomial polynomial per pair of cells
//!   sharing a row, and one per pair sharing a column.

use log::debug;

use crate::grid::Grid;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;

/// Builds the bit-pattern coordinate subsets of `[0, side)`.
///
/// For every strictly increasing triple of bit positions
/// `(b1 < b2 < b3)` with `2^b3 < side` and every 3-bit pattern, the
/// subset contains exactly the indices whose bits at those positions
/// match the pattern. The 8 subsets of one bit-position triple
/// partition `[0, side)`.
pub fn coordinate_subsets(side: usize) -> Vec<Vec<bool>> {
    let bits: Vec<usize> = (0..usize::BITS as usize)
        .take_while(|&b| (1usize << b) < side)
        .collect();

    let mut subsets = Vec::new();
    for (i, &b1) in bits.iter().enumerate() {
        for (j, &b2) in bits.iter().enumerate().skip(i + 1) {
            for &b3 in &bits[j + 1..] {
                for pattern in 0..8 {
                    let subset: Vec<bool> = (0..side)
                        .map(|v| {
                            let v1 = v >> b1 & 1;
                            let v2 = v >> b2 & 1;
                            let v3 = v >> b3 & 1;
                            v1 * 4 + v2 * 2 + v3 == pattern
                        })
                        .collect();
                    subsets.push(subset);
                }
            }
        }
    }
    subsets
}

/// Generates the full polynomial family for the grid.
///
/// Every returned polynomial is normalized. The family size is cubic in
/// the side length once the coordinate subsets are non-empty.
pub fn generate_polynomials(grid: Grid) -> Vec<Polynomial> {
    let side = grid.side();
    let subsets = coordinate_subsets(side);
    debug!(
        "generate: {} coordinate subsets for side {}",
        subsets.len(),
        side
    );

    let mut result = Vec::new();

    for i1 in 0..side {
        for i2 in 0..side {
            if i1 == i2 {
                continue;
            }
            for a in 0..side {
                // Row-type: cells of rows i1 and i2, columns shifted by a.
                for subset in &subsets {
                    let mut monomials = Vec::new();
                    for j in 0..side {
                        if subset[j] {
                            monomials.push(Monomial::new(
                                grid.cell(i1, j),
                                grid.cell(i2, (j + a) % side),
                            ));
                        }
                    }
                    result.push(Polynomial::from_monomials(monomials));
                }
                // Column-type: the transposed construction.
                for subset in &subsets {
                    let mut monomials = Vec::new();
                    for j in 0..side {
                        if subset[j] {
                            monomials.push(Monomial::new(
                                grid.cell(j, i1),
                                grid.cell((j + a) % side, i2),
                            ));
                        }
                    }
                    result.push(Polynomial::from_monomials(monomials));
                }
            }
        }
    }

    // Quadratics: both cells of each monomial share a row or a column.
    for i1 in 0..side {
        for j in 0..side {
            for k in j + 1..side {
                result.push(Polynomial::from_monomials(vec![Monomial::new(
                    grid.cell(i1, j),
                    grid.cell(i1, k),
                )]));
                result.push(Polynomial::from_monomials(vec![Monomial::new(
                    grid.cell(j, i1),
                    grid.cell(k, i1),
                )]));
            }
        }
    }

    debug!("generate: {} polynomials for {} grid", result.len(), grid);
    result
}
