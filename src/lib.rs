//! # variety-rs: bounded-weight zeros of quadratic GF(2) families
//!
//! **`variety-rs`** builds a structured family of degree-2 polynomials over
//! the boolean variables of an r×r grid and searches the points of a fixed
//! Hamming weight for a common zero --- a "nontrivial point" of the variety
//! cut out by the family.
//!
//! ## The construction
//!
//! Each of the `n = r²` grid cells is a boolean variable; a monomial is the
//! GF(2) product of two cells and a polynomial is the XOR of its monomials.
//! The generated family combines **paired-index polynomials**, whose
//! monomials pair cells of two rows (or two columns) through a cyclic shift
//! and a bit-pattern coordinate subset, with single-monomial **quadratics**
//! for every same-row and same-column cell pair.
//!
//! A separate diagnostic checks the structural completeness of the family:
//! every unordered triple of distinct variables should be reconstructible
//! from exactly one intersecting polynomial pair, C(n, 3) triples in total.
//!
//! ## Basic usage
//!
//! ```rust
//! use variety_rs::generate::generate_polynomials;
//! use variety_rs::grid::Grid;
//! use variety_rs::search::find_nontrivial_point;
//!
//! let grid = Grid::new(2);
//! let polys = generate_polynomials(grid);
//!
//! // At r = 2 only the quadratics survive, one per row and column.
//! assert_eq!(polys.len(), 4);
//!
//! // A weight-4 point would set both cells of every quadratic, so the
//! // search comes up empty.
//! assert_eq!(find_nontrivial_point(grid.size(), 4, &polys), None);
//!
//! // The anti-diagonal is a weight-2 common zero.
//! let point = find_nontrivial_point(grid.size(), 2, &polys).unwrap();
//! assert_eq!(point.to_string(), "1001");
//! ```
//!
//! ## Core components
//!
//! - **[`grid`]**: cell coordinates and linear variable indexing.
//! - **[`monomial`] / [`polynomial`] / [`point`]**: the GF(2) data model.
//! - **[`generate`]**: the polynomial-family generator.
//! - **[`verify`]**: the triple-reconstruction completeness diagnostic.
//! - **[`search`]**: inclusion-first depth-first search for a bounded-weight
//!   common zero.
//! - **[`counting`]**: combinatorial counts used by the diagnostic and for
//!   reporting search-space sizes.

pub mod counting;
pub mod generate;
pub mod grid;
pub mod monomial;
pub mod point;
pub mod polynomial;
pub mod search;
pub mod verify;
