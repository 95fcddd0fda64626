use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::Instant;
use tracing::{debug, info};

use super::context::RunContext;
use super::result::FlowResult;
use super::runner::run_flow;

/// Everything collected by one run.
#[derive(Debug)]
pub struct RunRecord {
    pub results: Vec<FlowResult>,
    pub rounds: usize,
    /// Elapsed time observed at the deadline check that ended the run.
    pub elapsed: Duration,
}

/// Launches rounds of `concurrency` flows until the duration budget is spent.
///
/// The deadline is only checked between rounds: a round in flight always runs
/// to completion, so the run may overshoot the budget by up to one round.
/// The result count is always a multiple of the concurrency.
pub async fn run_rounds(run: &RunContext) -> RunRecord {
    let budget = run.plan().run.duration_budget;
    let concurrency = run.plan().run.concurrency.get();
    let started = Instant::now();
    let mut results = Vec::new();
    let mut rounds = 0usize;

    loop {
        let elapsed = started.elapsed();
        if elapsed >= budget {
            info!(
                rounds,
                flows = results.len(),
                elapsed_ms = elapsed.as_millis(),
                "Duration budget reached."
            );
            return RunRecord {
                results,
                rounds,
                elapsed,
            };
        }

        let round = join_all((0..concurrency).map(|_| run_flow(run))).await;
        results.extend(round);
        rounds = rounds.saturating_add(1);
        debug!(round = rounds, flows = results.len(), "Round finished.");
    }
}
