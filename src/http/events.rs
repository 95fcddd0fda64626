use std::io::{IsTerminal, Write};

use crossterm::style::Stylize;

/// Outcome of one request attempt as reported to a [`RequestSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    Error,
}

impl RequestStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Success => "success",
            RequestStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEvent {
    pub status: RequestStatus,
    pub name: String,
    pub url: String,
}

impl RequestEvent {
    #[must_use]
    pub fn new(status: RequestStatus, name: &str, url: &str) -> Self {
        Self {
            status,
            name: name.to_owned(),
            url: url.to_owned(),
        }
    }
}

/// Receives one event per request attempt. Must not block or fail the
/// request path.
pub trait RequestSink: Send + Sync {
    fn record(&self, event: &RequestEvent);
}

/// Prints `Request <status>, name=<name>, url=<url>` lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        Self {
            color: !no_color && std::io::stdout().is_terminal(),
        }
    }
}

impl RequestSink for ConsoleSink {
    fn record(&self, event: &RequestEvent) {
        let line = format_event(event, self.color);
        let mut stdout = std::io::stdout().lock();
        let _write_result = writeln!(stdout, "{}", line);
    }
}

/// Emits request events as structured `tracing` events instead of stdout
/// lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RequestSink for TracingSink {
    fn record(&self, event: &RequestEvent) {
        match event.status {
            RequestStatus::Success => {
                tracing::info!(status = "success", name = %event.name, url = %event.url, "request");
            }
            RequestStatus::Error => {
                tracing::warn!(status = "error", name = %event.name, url = %event.url, "request");
            }
        }
    }
}

pub(crate) fn format_event(event: &RequestEvent, color: bool) -> String {
    let status = event.status.as_str();
    if color {
        let styled = match event.status {
            RequestStatus::Success => status.green().bold(),
            RequestStatus::Error => status.red().bold(),
        };
        format!("Request {}, name={}, url={}", styled, event.name, event.url)
    } else {
        format!("Request {}, name={}, url={}", status, event.name, event.url)
    }
}
