use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' timed out after {}ms.", .timeout.as_millis())]
    Timeout { url: String, timeout: Duration },
    #[error("Failed to connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid request for '{url}': {source}")]
    InvalidRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from '{url}': {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("Invalid header '{name}'.")]
    InvalidHeader { name: String },
    #[error("Headers must render to a table of values, got: {value}")]
    HeadersNotAnObject { value: String },
    #[error("Params must render to a table of values, got: {value}")]
    ParamsNotAnObject { value: String },
    #[error("Failed to encode request body: {source}")]
    EncodeBody {
        #[source]
        source: serde_json::Error,
    },
    #[cfg(test)]
    #[error("Scripted failure for '{url}'.")]
    Scripted { url: String },
}

impl RequestError {
    pub(crate) fn from_reqwest(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
                timeout,
            }
        } else if err.is_builder() {
            Self::InvalidRequest {
                url: url.to_owned(),
                source: err,
            }
        } else if err.is_connect() {
            Self::Connect {
                url: url.to_owned(),
                source: err,
            }
        } else {
            Self::Transport {
                url: url.to_owned(),
                source: err,
            }
        }
    }
}
