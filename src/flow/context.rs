use std::sync::Arc;

use crate::http::{RequestSink, Transport};

use super::plan::FlowPlan;

/// Everything one run needs, passed explicitly to the scheduler and runners:
/// the validated plan, the transport capability and the request-event sink.
#[derive(Clone)]
pub struct RunContext {
    plan: Arc<FlowPlan>,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn RequestSink>,
}

impl RunContext {
    #[must_use]
    pub fn new(plan: FlowPlan, transport: Arc<dyn Transport>, sink: Arc<dyn RequestSink>) -> Self {
        Self {
            plan: Arc::new(plan),
            transport,
            sink,
        }
    }

    #[must_use]
    pub fn plan(&self) -> &FlowPlan {
        &self.plan
    }

    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    #[must_use]
    pub fn sink(&self) -> &dyn RequestSink {
        self.sink.as_ref()
    }
}

impl std::fmt::Debug for RunContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}
