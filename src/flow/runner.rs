use tokio::time::Instant;
use tracing::{debug, error};

use crate::error::FlowError;
use crate::http::{RequestExecutor, RequestOptions};
use crate::template::TemplateContext;

use super::context::RunContext;
use super::plan::RequestStep;
use super::result::{FlowOutcome, FlowResult};
use super::validate::validate_response;

/// Runs every step of the plan once, in order, against a freshly seeded
/// template context. The first failing step ends the flow; later steps never
/// run.
pub async fn run_flow(run: &RunContext) -> FlowResult {
    let started = Instant::now();
    let mut execution = FlowExecution::new(run);
    let outcome = execution.run_steps().await;
    FlowResult::from_outcome(started.elapsed(), outcome, execution.completed)
}

struct FlowExecution<'run> {
    run: &'run RunContext,
    context: TemplateContext,
    completed: usize,
}

impl<'run> FlowExecution<'run> {
    fn new(run: &'run RunContext) -> Self {
        Self {
            run,
            context: TemplateContext::seeded(&run.plan().apis),
            completed: 0,
        }
    }

    async fn run_steps(&mut self) -> Result<FlowOutcome, FlowError> {
        let run = self.run;
        let executor = RequestExecutor::new(run.transport(), run.sink());

        for step in &run.plan().steps {
            self.run_step(&executor, step).await?;
            self.completed = self.completed.saturating_add(1);
        }

        debug!(steps = self.completed, "flow completed");
        Ok(FlowOutcome {
            steps_completed: self.completed,
        })
    }

    async fn run_step(
        &mut self,
        executor: &RequestExecutor<'_>,
        step: &RequestStep,
    ) -> Result<(), FlowError> {
        let url = self
            .context
            .render_str(&step.url)
            .map_err(|err| step_failed(step, &step.url, err))?;
        let options = self
            .render_options(step)
            .map_err(|err| step_failed(step, &url, err))?;

        let reply = executor
            .execute(&step.name, &step.method, &url, &options)
            .await
            .map_err(|err| step_failed(step, &url, err))?;

        if let Some(checks) = step.response_check.as_ref() {
            validate_response(&step.name, &reply, &self.context, checks)
                .map_err(|err| step_failed(step, &url, err))?;
        }

        if step.save_result {
            self.context.insert(step.name.clone(), reply.body);
        }
        Ok(())
    }

    fn render_options(&self, step: &RequestStep) -> Result<RequestOptions, FlowError> {
        let mut options = RequestOptions::new(step.timeout);
        options.params = step
            .params
            .as_ref()
            .map(|params| self.context.render_value(params))
            .transpose()?;
        options.headers = step
            .headers
            .as_ref()
            .map(|headers| self.context.render_value(headers))
            .transpose()?;
        options.body = step
            .data
            .as_ref()
            .map(|data| self.context.render_value(data))
            .transpose()?;
        Ok(options)
    }
}

fn step_failed(step: &RequestStep, url: &str, err: impl Into<FlowError>) -> FlowError {
    let err = err.into();
    error!(name = %step.name, url = %url, kind = err.kind(), "Flow step failed: {}", err);
    err
}
