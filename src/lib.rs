/*!
# daytour

A solver for the day-indexed travelling-salesman "travel contest" problem:
given `D` cities and, for each day `1..=D`, a set of priced flights between
cities, find the cheapest closed tour that visits every city exactly once,
one flight per day, starting and ending at a fixed city.

The solver runs in two phases (§4 of the spec): [`construct::greedy_tour`]
builds a first feasible tour via cheapest-first depth-first search, and
[`tabu::search`] improves it under a wall-clock budget using a tabu-search
metaheuristic. [`tabu::solve`] chains the two for callers that just want an
answer.
*/

#[cfg(feature = "logging")]
mod settings;

pub mod construct;
pub mod error;
pub mod graph;
pub mod instance;
pub mod neighbourhood;
pub mod semimatrix;
pub mod tabu;
pub mod tour;
