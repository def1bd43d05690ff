//! End-to-end tests for the polynomial family and the point search.
//!
//! Tests cover generation, the completeness diagnostic, and the
//! bounded-weight search on small grids.

use num_bigint::BigUint;

use variety_rs::counting::expected_triples;
use variety_rs::generate::generate_polynomials;
use variety_rs::grid::Grid;
use variety_rs::monomial::Monomial;
use variety_rs::point::Point;
use variety_rs::polynomial::Polynomial;
use variety_rs::search::find_nontrivial_point;
use variety_rs::verify::{check_construction, reconstructed_triples};

// ─── Generation ────────────────────────────────────────────────────────────────

#[test]
fn family_r2_is_quadratics_only() {
    let polys = generate_polynomials(Grid::new(2));
    let expected: Vec<Polynomial> = [(0, 1), (0, 2), (1, 3), (2, 3)]
        .iter()
        .map(|&(x, y)| Polynomial::from_monomials(vec![Monomial::new(x, y)]))
        .collect();
    for poly in &expected {
        assert!(polys.contains(poly), "missing {}", poly);
    }
    assert_eq!(polys.len(), expected.len());
}

#[test]
fn quadratic_evaluates_to_cell_conjunction() {
    let grid = Grid::new(3);
    let quadratic =
        Polynomial::from_monomials(vec![Monomial::new(grid.cell(1, 0), grid.cell(1, 2))]);

    let mut point = Point::new(grid.size());
    point.set(grid.cell(1, 0), true);
    assert!(!quadratic.evaluate(&point));

    point.set(grid.cell(1, 2), true);
    assert!(quadratic.evaluate(&point));
}

// ─── Completeness diagnostic ───────────────────────────────────────────────────

#[test]
fn r2_reconstructs_all_triples() {
    let grid = Grid::new(2);
    let polys = generate_polynomials(grid);
    let triples = reconstructed_triples(&polys);

    assert_eq!(triples.len(), 4);
    assert_eq!(expected_triples(grid.size()), BigUint::from(4u32));
    assert!(check_construction(grid.size(), &polys));

    let expected = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
    for triple in expected {
        assert!(triples.contains(&triple), "missing {:?}", triple);
    }
}

// ─── Point search ──────────────────────────────────────────────────────────────

#[test]
fn r2_weight_4_search_terminates_without_a_zero() {
    // The only weight-4 candidate is the all-ones point, which sets
    // both cells of every quadratic.
    let polys = generate_polynomials(Grid::new(2));
    assert_eq!(find_nontrivial_point(4, 4, &polys), None);
}

#[test]
fn r2_weight_2_finds_the_anti_diagonal() {
    let polys = generate_polynomials(Grid::new(2));
    let point = find_nontrivial_point(4, 2, &polys).unwrap();
    assert_eq!(point.to_string(), "1001");
    assert_eq!(point.weight(), 2);
    assert!(polys.iter().all(|poly| !poly.evaluate(&point)));
}

#[test]
fn r3_weight_3_finds_the_identity_permutation() {
    // A common zero of the quadratics must hit each row and column at
    // most once; the inclusion-first order reaches the identity
    // permutation matrix first.
    let grid = Grid::new(3);
    let polys = generate_polynomials(grid);
    let point = find_nontrivial_point(grid.size(), 3, &polys).unwrap();
    assert_eq!(point.to_string(), "100010001");
    assert!(polys.iter().all(|poly| !poly.evaluate(&point)));
}

#[test]
fn first_found_point_is_stable_across_runs() {
    for side in [2, 3] {
        let grid = Grid::new(side);
        let polys = generate_polynomials(grid);
        for weight in 0..=3 {
            let first = find_nontrivial_point(grid.size(), weight, &polys);
            let second = find_nontrivial_point(grid.size(), weight, &polys);
            assert_eq!(first, second, "side {} weight {}", side, weight);
        }
    }
}

#[test]
fn weight_0_succeeds_iff_origin_is_a_common_zero() {
    // Without constant terms every polynomial vanishes at the origin,
    // so the weight-0 search must report exactly that point.
    let grid = Grid::new(3);
    let polys = generate_polynomials(grid);
    let origin = Point::new(grid.size());
    assert!(polys.iter().all(|poly| !poly.evaluate(&origin)));
    assert_eq!(find_nontrivial_point(grid.size(), 0, &polys), Some(origin));
}
