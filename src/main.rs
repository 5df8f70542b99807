//! Reads an instance from stdin, solves it, and writes the tour to stdout.
//!
//! Exit codes: 1 for a malformed instance (a precondition failure before any
//! search runs), 0 for everything else — including an infeasible instance,
//! which is reported on stderr but is not treated as an operational error.

use daytour::{construct, error::TourError, instance, tabu};
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let parsed = match instance::parse_from(&mut reader) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!(%err, "failed to parse instance");
            return ExitCode::from(1);
        }
    };

    if parsed.graph.node_count() == 0 {
        error!("instance has no nodes");
        return ExitCode::from(1);
    }

    let (tour, cost) = match construct::greedy_tour(&parsed.graph, parsed.start) {
        Ok(result) => result,
        Err(TourError::Infeasible(msg)) => {
            error!(msg, "no feasible tour exists for this instance");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!(%err, "unexpected error during construction");
            return ExitCode::SUCCESS;
        }
    };

    let (best, best_cost) = tabu::search(&parsed.graph, tour, cost);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if let Err(err) = instance::write_tour(&mut writer, &parsed.graph, &best) {
        error!(%err, "failed to write tour");
        return ExitCode::from(1);
    }

    debug_assert_eq!(best.cost(), best_cost);
    ExitCode::SUCCESS
}
