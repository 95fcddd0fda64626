use tracing::debug;

use crate::args::HttpMethod;
use crate::error::{FlowError, RequestError};

use super::call::{HttpCall, HttpReply, RequestOptions};
use super::events::{RequestEvent, RequestSink, RequestStatus};
use super::transport::Transport;

/// Issues one HTTP call per step through a [`Transport`] and reports every
/// attempt to a [`RequestSink`].
pub struct RequestExecutor<'run> {
    transport: &'run dyn Transport,
    sink: &'run dyn RequestSink,
}

impl<'run> RequestExecutor<'run> {
    #[must_use]
    pub const fn new(transport: &'run dyn Transport, sink: &'run dyn RequestSink) -> Self {
        Self { transport, sink }
    }

    /// Executes one request. An unsupported `method` fails before any network
    /// call is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::UnsupportedMethod`] for methods outside the fixed
    /// set and [`FlowError::Request`] for transport failures, timeouts, and
    /// non-2xx statuses.
    pub async fn execute(
        &self,
        name: &str,
        method: &str,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpReply, FlowError> {
        let outcome = match method.parse::<HttpMethod>() {
            Ok(method) => self
                .dispatch(method, url, options)
                .await
                .map_err(FlowError::from),
            Err(err) => Err(err),
        };

        let status = if outcome.is_ok() {
            RequestStatus::Success
        } else {
            RequestStatus::Error
        };
        debug!(name, method, url, status = status.as_str(), "request finished");
        self.sink.record(&RequestEvent::new(status, name, url));

        outcome
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpReply, RequestError> {
        match method {
            HttpMethod::Get => self.get(url, options).await,
            HttpMethod::Post => self.post(url, options).await,
            HttpMethod::Put => self.put(url, options).await,
            HttpMethod::Patch => self.patch(url, options).await,
            HttpMethod::Delete => self.delete(url, options).await,
        }
    }

    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpReply, RequestError> {
        self.send(HttpCall::with_query(HttpMethod::Get, url, options)?)
            .await
    }

    async fn delete(&self, url: &str, options: &RequestOptions) -> Result<HttpReply, RequestError> {
        self.send(HttpCall::with_query(HttpMethod::Delete, url, options)?)
            .await
    }

    async fn post(&self, url: &str, options: &RequestOptions) -> Result<HttpReply, RequestError> {
        self.send(HttpCall::with_body(HttpMethod::Post, url, options)?)
            .await
    }

    async fn put(&self, url: &str, options: &RequestOptions) -> Result<HttpReply, RequestError> {
        self.send(HttpCall::with_body(HttpMethod::Put, url, options)?)
            .await
    }

    async fn patch(&self, url: &str, options: &RequestOptions) -> Result<HttpReply, RequestError> {
        self.send(HttpCall::with_body(HttpMethod::Patch, url, options)?)
            .await
    }

    async fn send(&self, call: HttpCall) -> Result<HttpReply, RequestError> {
        let url = call.url.clone();
        let raw = self.transport.send(call).await?;
        if !(200..=299).contains(&raw.status) {
            return Err(RequestError::Status {
                url,
                status: raw.status,
                body: raw.body,
            });
        }
        Ok(HttpReply::from_raw(raw))
    }
}
