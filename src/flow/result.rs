use std::time::Duration;

use crate::error::FlowError;

/// Successful end of a flow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOutcome {
    pub steps_completed: usize,
}

/// Record of one flow execution, produced exactly once when it ends.
#[derive(Debug)]
pub struct FlowResult {
    /// Wall-clock time from the first step's start to completion or failure.
    pub duration: Duration,
    pub success: bool,
    pub error: Option<FlowError>,
    /// Steps that finished successfully before the flow ended.
    pub steps_completed: usize,
}

impl FlowResult {
    pub(crate) fn from_outcome(
        duration: Duration,
        outcome: Result<FlowOutcome, FlowError>,
        steps_completed: usize,
    ) -> Self {
        match outcome {
            Ok(outcome) => Self {
                duration,
                success: true,
                error: None,
                steps_completed: outcome.steps_completed,
            },
            Err(err) => Self {
                duration,
                success: false,
                error: Some(err),
                steps_completed,
            },
        }
    }

    #[must_use]
    pub const fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}
