//! HTTP request execution: transport capability, call building, method
//! dispatch, and per-request events.
mod call;
mod events;
mod executor;
mod transport;


pub use call::{HttpCall, HttpReply, RawResponse, RequestOptions};
pub use events::{ConsoleSink, RequestEvent, RequestSink, RequestStatus, TracingSink};
pub use executor::RequestExecutor;
pub use transport::{ReqwestTransport, Transport};
