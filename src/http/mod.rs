//! HTTP server module.
//!
//! Serves plain HTTP; TLS is expected to terminate at a reverse proxy in front
//! of the service. Shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
