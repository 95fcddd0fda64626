use std::time::Duration;

use crate::flow::FlowResult;

/// Summary of one run.
///
/// `mean_time` and `standard_deviation` cover successful flows only and are
/// zero unless at least two flows succeeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub successful_flows: usize,
    pub failed_flows: usize,
    pub total_flows: usize,
    pub mean_time: f64,
    pub standard_deviation: f64,
    pub total_time: f64,
}

/// Folds flow results into a [`Report`]. `elapsed` is the run time observed
/// at the final deadline check.
#[must_use]
pub fn aggregate(results: &[FlowResult], elapsed: Duration) -> Report {
    let successful: Vec<f64> = results
        .iter()
        .filter(|result| result.success)
        .map(FlowResult::duration_secs)
        .collect();
    let successful_flows = successful.len();
    let total_flows = results.len();
    let (mean_time, standard_deviation) = mean_and_stdev(&successful).unwrap_or((0.0, 0.0));

    Report {
        successful_flows,
        failed_flows: total_flows.saturating_sub(successful_flows),
        total_flows,
        mean_time,
        standard_deviation,
        total_time: elapsed.as_secs_f64(),
    }
}

/// Mean and sample standard deviation (n - 1 denominator). `None` for fewer
/// than two samples.
fn mean_and_stdev(samples: &[f64]) -> Option<(f64, f64)> {
    if samples.len() < 2 {
        return None;
    }
    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    let squares: f64 = samples.iter().map(|sample| (sample - mean).powi(2)).sum();
    let variance = squares / (count - 1.0);
    Some((mean, variance.sqrt()))
}
