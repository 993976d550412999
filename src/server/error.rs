//! Error types for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be opened, bound, or put into
    /// listening mode. Fatal at startup.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    Parse(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A request grew past the buffering limit before it was complete.
    #[error("Request exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
