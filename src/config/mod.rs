//! Configuration loading and application.
mod apply;
mod loader;
mod parse;
pub mod types;


use std::path::Path;

pub use apply::apply_config;
pub use loader::load_config_file;
pub(crate) use parse::parse_duration_value;

use crate::error::ConfigError;
use crate::flow::FlowPlan;

/// Loads a flow configuration file and validates it against the process
/// environment.
///
/// # Errors
///
/// Returns an error when the file cannot be read, parsed, or validated.
pub fn load_flow_plan(path: &Path) -> Result<FlowPlan, ConfigError> {
    let config = load_config_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    apply_config(config, base_dir, |name| std::env::var(name).ok())
}
