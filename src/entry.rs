use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use crate::args::{FlowArgs, OutputFormat};
use crate::config::load_flow_plan;
use crate::error::{AppError, AppResult};
use crate::flow::{FlowPlan, RunContext, RunRecord, run_rounds};
use crate::http::{ConsoleSink, RequestSink, ReqwestTransport, TracingSink};
use crate::metrics::{aggregate, render_json, render_text};

/// Binary entry point: parse arguments, load the flow plan, run it, print the
/// report.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, or when
/// the runtime or HTTP client cannot be built. Flow failures are counted in
/// the report and never end the process.
pub fn run() -> AppResult<()> {
    let args = FlowArgs::parse();
    crate::logger::init_logging(args.verbose, args.no_color);

    let plan = load_plan(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(execute(plan, &args))?;
    println!("{output}");
    Ok(())
}

/// Loads the configured plan and applies command-line overrides.
///
/// # Errors
///
/// Returns [`AppError::Config`] when the file cannot be loaded or validated.
pub fn load_plan(args: &FlowArgs) -> AppResult<FlowPlan> {
    let mut plan = load_flow_plan(&args.config).map_err(|err| {
        error!("Failed to load {}: {}", args.config.display(), err);
        AppError::config(err)
    })?;

    if let Some(duration) = args.duration {
        plan.run.duration_budget = duration;
    }
    if let Some(concurrency) = args.concurrency {
        plan.run.concurrency = concurrency;
    }
    Ok(plan)
}

/// Runs the plan to completion and returns the rendered report.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the report
/// cannot be serialized.
pub async fn execute(plan: FlowPlan, args: &FlowArgs) -> AppResult<String> {
    let transport = Arc::new(ReqwestTransport::new().map_err(AppError::flow)?);
    let sink: Arc<dyn RequestSink> = match args.output_format {
        OutputFormat::Text => {
            println!("{}", start_message(&plan));
            Arc::new(ConsoleSink::new(args.no_color))
        }
        OutputFormat::Json => Arc::new(TracingSink),
    };
    info!(
        concurrency = plan.run.concurrency.get(),
        duration_secs = plan.run.duration_budget.as_secs_f64(),
        steps = plan.steps.len(),
        "Starting flows."
    );

    let run = RunContext::new(plan, transport, sink);
    let record = run_rounds(&run).await;
    render_report(&record, args.output_format)
}

/// Aggregates the run record and renders it in the requested format.
///
/// # Errors
///
/// Returns [`AppError::Json`] if the JSON report cannot be serialized.
pub fn render_report(record: &RunRecord, format: OutputFormat) -> AppResult<String> {
    let report = aggregate(&record.results, record.elapsed);
    match format {
        OutputFormat::Text => Ok(format!("\n{}", render_text(&report))),
        OutputFormat::Json => Ok(render_json(&report, record.rounds)?),
    }
}

fn start_message(plan: &FlowPlan) -> String {
    format!(
        "Start bloodaxe, number_of_concurrent_flows={}, duration={} seconds",
        plan.run.concurrency.get(),
        plan.run.duration_budget.as_secs_f64()
    )
}
