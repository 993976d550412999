//! A minimal concurrent HTTP server with a shared request tally.
//!
//! This library provides the connection-handling engine for a small JSON
//! server: a listener that spreads accepted sockets across a fixed pool of
//! worker threads, a per-connection session that reads one request,
//! dispatches it, writes one response, and closes, and a process-wide
//! request counter updated atomically from any number of concurrent
//! sessions.
//!
//! # Features
//!
//! - Parse HTTP/1.x requests incrementally from a buffered connection
//! - Exactly one request and one response per connection (no keep-alive)
//! - Two fixed routes answered with JSON bodies, everything else is a 404
//! - A shared tally incremented once per handled request, with no lost
//!   updates under concurrency
//! - Proper error handling with descriptive error messages
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use tallyhttp::{parse_request, ParseStatus};
//!
//! let request_bytes = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(ParseStatus::Complete(request)) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!         println!("Version: {}", request.version);
//!     }
//!     Ok(ParseStatus::Partial) => {
//!         println!("Need more bytes");
//!     }
//!     Err(err) => {
//!         println!("Error parsing request: {err}");
//!     }
//! }
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use tallyhttp::{Listener, RequestCounter, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tallyhttp::ServerError> {
//!     let listener = Listener::bind(ServerConfig::default()).await?;
//!     listener.run(RequestCounter::new()).await;
//!     Ok(())
//! }
//! ```

// Export the counter module
pub mod counter;

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use counter::RequestCounter;
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion, Method, ParseStatus};
pub use server::{Error as ServerError, HttpResponse, Listener, ServerConfig, Session, StatusCode};
