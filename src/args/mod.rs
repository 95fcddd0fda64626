mod cli;
mod parsers;
mod types;


pub use cli::FlowArgs;
pub use types::{HttpMethod, OutputFormat, PositiveUsize};
