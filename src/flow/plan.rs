use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

use crate::args::PositiveUsize;

/// Per-call timeout used when a step does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Static description of an API, seeded into every flow's template context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescriptor {
    pub name: String,
    pub base_url: String,
    pub extra_vars: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCheck {
    pub data: Option<Value>,
    pub status_code: Option<u16>,
}

/// One declared HTTP request of a flow. Shared read-only by every execution.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestStep {
    pub name: String,
    pub url: String,
    pub method: String,
    pub data: Option<Value>,
    pub params: Option<Value>,
    pub headers: Option<Value>,
    pub timeout: Duration,
    pub save_result: bool,
    pub response_check: Option<ResponseCheck>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub duration_budget: Duration,
    pub concurrency: PositiveUsize,
}

/// Validated run input: run settings, API descriptors and steps in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPlan {
    pub run: RunConfig,
    pub apis: Vec<ApiDescriptor>,
    pub steps: Vec<RequestStep>,
}
