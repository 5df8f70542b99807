/*!
# Neighbourhood Evaluator

Implements the day-indexed 2-opt-style move (§4.3 of the spec): swapping the
cities visited on two days `i` and `j` of the current tour, where
`1 <= j < i <= D - 2`, while keeping every other day's city fixed. Swapping
two cities touches three edges when they are adjacent (`i == j + 1`) and
four edges otherwise, because the adjacent case shares one boundary edge
between the two positions.

[`evaluate`] implements the full selection policy: the best improving move
wins outright via the aspiration criterion (even if tabu), otherwise the
least frequency-penalized non-tabu move is returned.
*/

use crate::graph::{Edge, Graph};
use crate::semimatrix::SemiMatrix;
use crate::tour::Tour;

/// A validated, ready-to-apply swap of the cities visited on days `i` and
/// `j`, with its cost delta and the 3 or 4 edge replacements it requires.
#[derive(Debug, Clone)]
pub struct Move {
    pub i: usize,
    pub j: usize,
    pub delta: i64,
    pub resulting_cost: u64,
    pub(crate) replacements: Vec<(usize, Edge)>,
}

/// Builds the move that swaps the cities at positions `i` and `j`, or
/// `None` if any required replacement edge is missing from the graph.
pub(crate) fn try_build_move(
    graph: &Graph,
    tour: &Tour,
    current_cost: u64,
    i: usize,
    j: usize,
) -> Option<Move> {
    let path = &tour.path;
    let a = path[j].src; // the city visited on day j
    let b = path[i].src; // the city visited on day i

    let (replacements, old_sum, new_sum) = if i == j + 1 {
        let left = graph.lookup(path[j - 1].src, (j - 1) as u32, b)?;
        let mid = graph.lookup(b, j as u32, a)?;
        let right = graph.lookup(a, i as u32, path[i].dst)?;
        let old_sum = price_sum([path[j - 1], path[j], path[i]]);
        let new_sum = price_sum([left, mid, right]);
        (vec![(j - 1, left), (j, mid), (i, right)], old_sum, new_sum)
    } else {
        let left_j = graph.lookup(path[j - 1].src, (j - 1) as u32, b)?;
        let right_j = graph.lookup(b, j as u32, path[j].dst)?;
        let left_i = graph.lookup(path[i - 1].src, (i - 1) as u32, a)?;
        let right_i = graph.lookup(a, i as u32, path[i].dst)?;
        let old_sum = price_sum([path[j - 1], path[j], path[i - 1], path[i]]);
        let new_sum = price_sum([left_j, right_j, left_i, right_i]);
        (
            vec![(j - 1, left_j), (j, right_j), (i - 1, left_i), (i, right_i)],
            old_sum,
            new_sum,
        )
    };

    let delta = new_sum - old_sum;
    let resulting_cost = (current_cost as i64 + delta).max(0) as u64;
    Some(Move {
        i,
        j,
        delta,
        resulting_cost,
        replacements,
    })
}

fn price_sum<const N: usize>(edges: [Edge; N]) -> i64 {
    edges.iter().map(|e| e.price as i64).sum()
}

/// Enumerates every valid `(i, j)` move for the current tour.
pub(crate) fn enumerate_moves(graph: &Graph, tour: &Tour, current_cost: u64) -> Vec<Move> {
    let days_total = tour.len();
    let mut moves = Vec::new();
    if days_total < 4 {
        return moves;
    }
    for i in 2..=days_total - 2 {
        for j in 1..i {
            if let Some(mv) = try_build_move(graph, tour, current_cost, i, j) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Selects the next move to apply, following the aspiration + frequency-
/// penalized diversification policy described in §4.3.
///
/// Returns `None` if no valid move exists for the current tour.
pub fn evaluate(
    graph: &Graph,
    tour: &Tour,
    current_cost: u64,
    incumbent_cost: u64,
    tabu: &SemiMatrix,
    freq: &SemiMatrix,
    min_price: u32,
) -> Option<Move> {
    let moves = enumerate_moves(graph, tour, current_cost);
    let best_improving = moves.iter().min_by_key(|m| m.resulting_cost)?;

    if best_improving.resulting_cost < incumbent_cost {
        return Some(best_improving.clone());
    }

    moves
        .iter()
        .filter(|m| !tabu.applies(m.i, m.j))
        .min_by_key(|m| m.resulting_cost + min_price as u64 * freq.get(m.i, m.j) as u64)
        .cloned()
}
