//! hello-relay: cross-process greeting demo
//!
//! Responder programs turn one command-line argument into a one-line reply.
//! The relay launches every configured responder as a child process with the
//! same input and reports their replies together, from the command line or
//! over HTTP.

/// Command-line interface of the `hello-relay` binary
pub mod cli;

/// Relay configuration
pub mod config;

/// Responder personas and argument selection
pub mod greeting;

/// Launching responders and collecting their replies
pub mod relay;

/// HTTP front end for the relay
pub mod server;

pub use anyhow::Result;
pub use config::RelayConfig;
pub use relay::{Relay, Report, ReportFormat, ResponderSpec};
