//! Server configuration.

use std::net::SocketAddr;

/// HTTP server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The number of worker threads driving the event loop.
    pub worker_threads: usize,
    /// The number of bytes requested per read call.
    pub read_buffer_size: usize,
    /// The maximum number of bytes buffered for a single request.
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 8080).into(),
            worker_threads: 4,
            read_buffer_size: 1024,
            max_request_size: 8192,
        }
    }
}
