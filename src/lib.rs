//! Core library for the `bloodaxe` CLI.
//!
//! `bloodaxe` replays a configured chain of HTTP requests (a flow) in
//! concurrent rounds until a duration budget is spent, then reports how long
//! the successful flows took. Responses of earlier steps can be saved and
//! referenced from later steps through templates.
//!
//! The binary is the primary interface; the modules below are exposed so the
//! engine can be driven programmatically and tested end to end.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod flow;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod template;

#[cfg(test)]
mod test_support;
