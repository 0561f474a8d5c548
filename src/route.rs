//! Daily stop ordering (nearest-neighbor heuristic).
//!
//! Zone capacity caps keep daily stop counts small (single-digit to low
//! double-digit), so a greedy O(n²) pass is plenty. An optional 2-opt
//! refinement is layered over the same contract for callers who want a
//! tighter path; both produce a deterministic permutation of the input.

use crate::geo;
use crate::traits::Stop;

/// Improvement passes for the 2-opt refinement.
const MAX_REFINE_PASSES: usize = 100;

/// Order stops with the nearest-neighbor heuristic.
///
/// The first stop in input order is the starting point; each step moves
/// to the closest unvisited stop, ties going to the first-encountered
/// minimum. Inputs of two or fewer stops come back in input order.
pub fn optimize_route<S: Stop>(stops: &[S]) -> Vec<S::Id> {
    if stops.len() <= 2 {
        return stops.iter().map(|s| s.id().clone()).collect();
    }

    nearest_neighbor_order(stops)
        .into_iter()
        .map(|i| stops[i].id().clone())
        .collect()
}

/// Nearest-neighbor order with a bounded 2-opt improvement phase.
///
/// Same contract as [`optimize_route`] (deterministic permutation,
/// first stop stays first); segment reversals that shorten the total
/// open-path distance are applied until a pass finds none.
pub fn optimize_route_refined<S: Stop>(stops: &[S]) -> Vec<S::Id> {
    if stops.len() <= 2 {
        return stops.iter().map(|s| s.id().clone()).collect();
    }

    let mut order = nearest_neighbor_order(stops);

    for _ in 0..MAX_REFINE_PASSES {
        if !two_opt_improve(stops, &mut order) {
            break;
        }
    }

    order.into_iter().map(|i| stops[i].id().clone()).collect()
}

fn nearest_neighbor_order<S: Stop>(stops: &[S]) -> Vec<usize> {
    let mut result = Vec::with_capacity(stops.len());
    let mut remaining: Vec<usize> = (0..stops.len()).collect();

    // Start from the first stop in input order.
    let mut current = remaining.remove(0);
    result.push(current);

    while !remaining.is_empty() {
        let mut nearest_pos = 0;
        let mut nearest_distance = f64::INFINITY;

        for (pos, &candidate) in remaining.iter().enumerate() {
            let distance =
                geo::distance_miles(stops[current].location(), stops[candidate].location());
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_pos = pos;
            }
        }

        current = remaining.remove(nearest_pos);
        result.push(current);
    }

    result
}

/// Reverse one segment if that shortens the path. Returns true if an
/// improvement was applied. The starting stop is never moved.
fn two_opt_improve<S: Stop>(stops: &[S], order: &mut [usize]) -> bool {
    let n = order.len();
    let current_total = path_distance(stops, order);

    for i in 1..n - 1 {
        for j in i + 1..n {
            order[i..=j].reverse();
            if path_distance(stops, order) < current_total {
                return true;
            }
            order[i..=j].reverse();
        }
    }

    false
}

fn path_distance<S: Stop>(stops: &[S], order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|pair| geo::distance_miles(stops[pair[0]].location(), stops[pair[1]].location()))
        .sum()
}
