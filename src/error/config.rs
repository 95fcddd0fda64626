use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: usize },
    #[error("Invalid number '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Config must include at least one [[request]] step.")]
    MissingRequests,
    #[error("Request {index} must have a non-empty name.")]
    RequestNameEmpty { index: usize },
    #[error("API {index} must have a non-empty name.")]
    ApiNameEmpty { index: usize },
    #[error("API name '{name}' is defined more than once.")]
    DuplicateApiName { name: String },
    #[error("API '{api}' expects environment variable '{var}' which is not set.")]
    MissingEnvVar { api: String, var: String },
    #[error("Failed to read data file '{path}' for request '{request}': {source}")]
    ReadDataFile {
        request: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in data file '{path}' for request '{request}': {source}")]
    ParseDataFile {
        request: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid '{field}': {message}")]
    InvalidField { field: String, message: String },
}
