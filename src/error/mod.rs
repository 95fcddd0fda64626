mod app;
mod config;
mod flow;
mod http;
mod template;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use flow::FlowError;
pub use http::RequestError;
pub use template::TemplateError;
pub use validation::ValidationError;
