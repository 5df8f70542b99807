/*!
# Tour Representation

A [`Tour`] is an ordered sequence of `D` edges forming a closed, day-indexed
Hamiltonian cycle (§3 of the spec). The working tour mutated by the tabu
driver and the incumbent snapshot kept alongside it are both plain `Tour`
values; snapshotting on improvement is a full `Vec` clone, which is cheap
(`O(D)`) next to the `O(D²)` neighbourhood scan that produces each move.
*/

use crate::graph::{Edge, NodeId};
use crate::neighbourhood::Move;
use std::collections::HashSet;

/// An ordered sequence of edges, one per day, closing back on its start.
#[derive(Debug, Clone)]
pub struct Tour {
    pub path: Vec<Edge>,
    pub start: NodeId,
}

impl Tour {
    /// Wraps an already-built path. Does not itself validate well-formedness
    /// — see [`Tour::is_day_well_formed`] and friends for that.
    pub fn new(path: Vec<Edge>, start: NodeId) -> Self {
        Self { path, start }
    }

    /// The number of days in the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The sum of all edge prices. Recomputed from scratch; callers on a
    /// hot path should track cost incrementally via `Move::delta` instead.
    pub fn cost(&self) -> u64 {
        self.path.iter().map(|e| e.price as u64).sum()
    }

    /// `path[k].day == k` for every `k`.
    pub fn is_day_well_formed(&self) -> bool {
        self.path
            .iter()
            .enumerate()
            .all(|(k, e)| e.day as usize == k)
    }

    /// `path[k].dst == path[k + 1].src` for every `k < len - 1`.
    pub fn is_chain(&self) -> bool {
        self.path.windows(2).all(|w| w[0].dst == w[1].src)
    }

    /// The tour starts and ends at `self.start`.
    pub fn is_closed(&self) -> bool {
        match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) => first.src == self.start && last.dst == self.start,
            _ => false,
        }
    }

    /// Every day visits a distinct city.
    pub fn is_hamiltonian(&self) -> bool {
        let visited: HashSet<NodeId> = self.path.iter().map(|e| e.src).collect();
        visited.len() == self.path.len()
    }

    /// Applies a validated move's edge replacements in place. Does not touch
    /// cost bookkeeping — the tabu driver tracks that separately using the
    /// move's precomputed `delta`, per the cost-consistency invariant.
    pub fn apply_move(&mut self, mv: &Move) {
        for &(position, edge) in &mv.replacements {
            self.path[position] = edge;
        }
    }
}
