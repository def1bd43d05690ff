//! Bounded-weight search for a common zero of a polynomial family.

use log::debug;

use crate::point::Point;
use crate::polynomial::Polynomial;

/// Searches for a point of Hamming weight exactly `weight` at which
/// every polynomial in `polys` evaluates to zero.
///
/// Coordinates are decided in index order, trying "include" before
/// "exclude", so when several such points exist the returned one is
/// determined by that order. Returns `None` when no point of the
/// requested weight is a common zero.
///
/// The only pruning is the weight budget, so the cost is bounded by
/// roughly C(n, weight) full evaluations of the family.
pub fn find_nontrivial_point(n: usize, weight: usize, polys: &[Polynomial]) -> Option<Point> {
    let mut point = Point::new(n);
    if search(polys, &mut point, 0, weight) {
        debug!("search: found weight-{} point {}", weight, point);
        Some(point)
    } else {
        debug!("search: no weight-{} point over {} variables", weight, n);
        None
    }
}

/// Depth-first backtracking over coordinates `index..n` with
/// `remaining` weight budget.
///
/// Each call sets its own coordinate, recurses, and restores it before
/// returning on failure, so the buffer is exactly as found except on
/// the success path, where it holds the satisfying assignment.
fn search(polys: &[Polynomial], point: &mut Point, index: usize, remaining: usize) -> bool {
    if index == point.len() {
        return remaining == 0 && polys.iter().all(|poly| !poly.evaluate(point));
    }

    // Include the coordinate first while budget remains.
    if remaining > 0 {
        point.set(index, true);
        if search(polys, point, index + 1, remaining - 1) {
            return true;
        }
        point.set(index, false);
    }

    search(polys, point, index + 1, remaining)
}
