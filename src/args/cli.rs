use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replay chained HTTP API flows concurrently for a fixed duration and report flow latency statistics."
)]
pub struct FlowArgs {
    /// Flow configuration file (.toml or .json)
    #[arg(value_name = "FLOW_CONFIG_FILE")]
    pub config: PathBuf,

    /// Override configs.duration (supports ms/s/m/h, plain numbers are seconds)
    #[arg(long = "duration", short = 'd', value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Override configs.number_of_concurrent_flows
    #[arg(long = "concurrency", short = 'c', value_parser = parse_positive_usize)]
    pub concurrency: Option<PositiveUsize>,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}
