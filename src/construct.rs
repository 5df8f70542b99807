/*!
# Greedy Constructor

Builds the first feasible Hamiltonian tour via a depth-first search that
always tries the cheapest untried outgoing edge next (§4.2). The search is
expressed as an explicit work stack of `Advance`/`Retreat` operations rather
than recursion, so that backtracking ("try the next cheaper alternative on
dead end") is just popping the stack.
*/

use crate::error::{Result, TourError};
use crate::graph::{Edge, Graph, NodeId};
use crate::tour::Tour;
use tracing::{error, trace};

enum StackOp {
    Advance(Edge),
    Retreat(Edge),
}

fn push_frontier(
    stack: &mut Vec<StackOp>,
    graph: &Graph,
    visited: &[bool],
    node: NodeId,
    day: usize,
    days_total: usize,
    start: NodeId,
) {
    // `edges_on_day` is already sorted ascending by price; push in reverse
    // so the cheapest candidate ends on top of the stack.
    let candidates: Vec<Edge> = graph
        .edges_on_day(node, day as u32)
        .iter()
        .copied()
        .filter(|e| (day == days_total - 1 && e.dst == start) || !visited[e.dst.index()])
        .collect();
    for edge in candidates.into_iter().rev() {
        stack.push(StackOp::Advance(edge));
    }
}

/// Finds the cheapest-first feasible Hamiltonian tour starting (and ending)
/// at `start`, or [`TourError::Infeasible`] if the search stack empties
/// before reaching day `D`.
pub fn greedy_tour(graph: &Graph, start: NodeId) -> Result<(Tour, u64)> {
    let days_total = graph.node_count();
    if days_total == 0 {
        return Err(TourError::infeasible("graph has no nodes"));
    }

    let mut visited = vec![false; days_total];
    visited[start.index()] = true;
    let mut path: Vec<Edge> = Vec::with_capacity(days_total);
    let mut day = 0usize;
    let mut total_price: u64 = 0;

    let mut stack = Vec::new();
    push_frontier(&mut stack, graph, &visited, start, 0, days_total, start);

    loop {
        let Some(op) = stack.pop() else {
            error!(day, days_total, "stack depleted before reaching the last day");
            return Err(TourError::infeasible(format!(
                "stack depleted at day {day} of {days_total}"
            )));
        };
        match op {
            StackOp::Retreat(edge) => {
                total_price -= edge.price as u64;
                visited[edge.dst.index()] = false;
                path.pop();
                day -= 1;
            }
            StackOp::Advance(edge) => {
                day += 1;
                visited[edge.dst.index()] = true;
                total_price += edge.price as u64;
                path.push(edge);
                stack.push(StackOp::Retreat(edge));

                if day == days_total {
                    break;
                }
                push_frontier(&mut stack, graph, &visited, edge.dst, day, days_total, start);
                trace!(day, stack_depth = stack.len(), "advanced greedy search");
            }
        }
    }

    Ok((Tour::new(path, start), total_price))
}
