//! In-memory transport and sink doubles shared by unit tests.
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::args::HttpMethod;
use crate::error::RequestError;
use crate::http::{HttpCall, RawResponse, RequestEvent, RequestSink, Transport};

#[derive(Debug, Clone)]
pub(crate) enum ScriptedReply {
    Respond { status: u16, body: String },
    Fail,
}

impl ScriptedReply {
    pub(crate) fn json(status: u16, body: &str) -> Self {
        ScriptedReply::Respond {
            status,
            body: body.to_owned(),
        }
    }
}

/// Transport that answers from a fixed `(method, url)` table and records
/// every call. Unknown routes answer 404.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    routes: BTreeMap<(&'static str, String), ScriptedReply>,
    delay: Option<Duration>,
    calls: Mutex<Vec<HttpCall>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, method: HttpMethod, url: &str, reply: ScriptedReply) -> Self {
        self.routes.insert((method.as_str(), url.to_owned()), reply);
        self
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<HttpCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, call: HttpCall) -> Result<RawResponse, RequestError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.routes.get(&(call.method.as_str(), call.url.clone())) {
            Some(ScriptedReply::Respond { status, body }) => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(ScriptedReply::Fail) => Err(RequestError::Scripted { url: call.url }),
            None => Ok(RawResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<RequestEvent>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<RequestEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl RequestSink for RecordingSink {
    fn record(&self, event: &RequestEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
