//! HTTP server implementation for tallyhttp.
//!
//! This module provides the connection-handling engine: a listener that
//! spreads accepted sockets across the runtime's worker pool, a
//! per-connection session running the read-dispatch-write-close sequence,
//! and the two fixed route handlers backed by the shared request tally.

mod response;
mod config;
mod error;
mod routes;
mod session;
mod listener;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use routes::{data_body, extract_message, index_body, NOT_FOUND_BODY};
pub use session::Session;
pub use listener::Listener;
