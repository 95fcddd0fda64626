//! Flow execution engine.
//!
//! A flow is the ordered list of request steps from the config. The runner
//! executes one flow against its own template context, stopping at the first
//! failure; the scheduler replays flows in concurrent rounds until the
//! duration budget is spent.
mod context;
mod plan;
mod result;
mod runner;
mod scheduler;
mod validate;


pub use context::RunContext;
pub use plan::{ApiDescriptor, DEFAULT_TIMEOUT, FlowPlan, RequestStep, ResponseCheck, RunConfig};
pub use result::{FlowOutcome, FlowResult};
pub use runner::run_flow;
pub use scheduler::{RunRecord, run_rounds};
pub use validate::validate_response;
