use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;

use crate::args::HttpMethod;
use crate::error::RequestError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Rendered inputs of one step, ready to be turned into an [`HttpCall`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub params: Option<Value>,
    pub headers: Option<Value>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl RequestOptions {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            params: None,
            headers: None,
            body: None,
            timeout,
        }
    }
}

/// One fully rendered HTTP call handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCall {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpCall {
    /// Builds a call that carries `params` as a query string and no body.
    pub(crate) fn with_query(
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            method,
            url: url.to_owned(),
            query: query_pairs(options.params.as_ref())?,
            headers: header_pairs(options.headers.as_ref())?,
            body: None,
            timeout: options.timeout,
        })
    }

    /// Builds a call that carries `body` as JSON text (`null` when absent).
    pub(crate) fn with_body(
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Self, RequestError> {
        let mut headers = header_pairs(options.headers.as_ref())?;
        let has_content_type = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
        if !has_content_type {
            headers.push((CONTENT_TYPE.as_str().to_owned(), JSON_CONTENT_TYPE.to_owned()));
        }
        let body = serde_json::to_string(options.body.as_ref().unwrap_or(&Value::Null))
            .map_err(|err| RequestError::EncodeBody { source: err })?;

        Ok(Self {
            method,
            url: url.to_owned(),
            query: Vec::new(),
            headers,
            body: Some(body),
            timeout: options.timeout,
        })
    }
}

/// Status and raw body text as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// A successful step response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status_code: u16,
    pub body: Value,
}

impl HttpReply {
    /// Decodes the body as JSON; empty bodies become `null` and non-JSON text
    /// is kept as a string.
    #[must_use]
    pub fn from_raw(raw: RawResponse) -> Self {
        let body = if raw.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&raw.body).unwrap_or(Value::String(raw.body))
        };
        Self {
            status_code: raw.status,
            body,
        }
    }
}

fn query_pairs(params: Option<&Value>) -> Result<Vec<(String, String)>, RequestError> {
    match params {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), scalar_text(value)))
            .collect()),
        Some(other) => Err(RequestError::ParamsNotAnObject {
            value: other.to_string(),
        }),
    }
}

fn header_pairs(headers: Option<&Value>) -> Result<Vec<(String, String)>, RequestError> {
    let map = match headers {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(RequestError::HeadersNotAnObject {
                value: other.to_string(),
            });
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (name, value) in map {
        let text = scalar_text(value);
        if HeaderName::from_bytes(name.as_bytes()).is_err()
            || HeaderValue::from_str(&text).is_err()
        {
            return Err(RequestError::InvalidHeader { name: name.clone() });
        }
        pairs.push((name.clone(), text));
    }
    Ok(pairs)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            value.to_string()
        }
    }
}
