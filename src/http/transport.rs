use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::args::HttpMethod;
use crate::error::RequestError;

use super::call::{HttpCall, RawResponse};

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("bloodaxe/", env!("CARGO_PKG_VERSION"));

/// Capability that performs exactly one HTTP call.
///
/// Implementations report transport-level failures only; status codes are
/// classified by the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, call: HttpCall) -> Result<RawResponse, RequestError>;
}

/// [`Transport`] backed by a single shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new() -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| RequestError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, call: HttpCall) -> Result<RawResponse, RequestError> {
        let mut request_builder = self
            .client
            .request(to_reqwest_method(call.method), call.url.as_str())
            .timeout(call.timeout);

        if !call.query.is_empty() {
            request_builder = request_builder.query(&call.query);
        }
        for (name, value) in &call.headers {
            request_builder = request_builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = call.body {
            request_builder = request_builder.body(body);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|err| RequestError::from_reqwest(&call.url, call.timeout, err))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            if err.is_timeout() {
                RequestError::Timeout {
                    url: call.url.clone(),
                    timeout: call.timeout,
                }
            } else {
                RequestError::ReadBody {
                    url: call.url.clone(),
                    source: err,
                }
            }
        })?;

        Ok(RawResponse { status, body })
    }
}

const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
