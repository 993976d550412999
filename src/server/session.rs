//! Per-connection session.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::counter::RequestCounter;
use crate::parser::{parse_request, HttpRequest, Method, ParseStatus};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::routes;

/// One session per accepted connection.
///
/// The session exclusively owns its stream and drives it through the
/// read-dispatch-write-close sequence exactly once. There is no keep-alive:
/// after one response the sending half is shut down and the session ends.
///
/// The stream is generic over the async I/O traits so tests can substitute
/// an in-memory stream for a TCP socket.
pub struct Session<S> {
    stream: S,
    buffer: Vec<u8>,
    counter: RequestCounter,
    read_buffer_size: usize,
    max_request_size: usize,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Session<S> {
    /// Create a session owning the given stream.
    pub fn new(stream: S, counter: RequestCounter, config: &ServerConfig) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(config.read_buffer_size),
            counter,
            read_buffer_size: config.read_buffer_size,
            max_request_size: config.max_request_size,
        }
    }

    /// Drive the connection to completion.
    ///
    /// Reads one request, dispatches it, writes the response, and shuts down
    /// the sending half. Errors end the session early; the connection is
    /// dropped without a response and nothing is retried.
    pub async fn run(mut self) -> Result<(), Error> {
        let request = match self.read_request().await? {
            Some(request) => request,
            // Peer went away before sending a complete request.
            None => return Ok(()),
        };

        let response = self.dispatch(&request)?;
        self.write_response(&response).await
    }

    /// Accumulate reads until the buffer holds a complete request.
    ///
    /// Returns `None` on a clean EOF before the request is complete.
    async fn read_request(&mut self) -> Result<Option<HttpRequest>, Error> {
        loop {
            if let ParseStatus::Complete(request) = parse_request(&self.buffer)? {
                return Ok(Some(request));
            }

            if self.buffer.len() >= self.max_request_size {
                return Err(Error::RequestTooLarge {
                    limit: self.max_request_size,
                });
            }

            let mut chunk = vec![0; self.read_buffer_size];
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                return Ok(None);
            }
            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }

    /// Match the request against the two fixed routes and build the response.
    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let (status, body) = match (request.method, request.path.as_str()) {
            (Method::GET, "/") => (StatusCode::Ok, routes::index_body(&self.counter)?),
            (Method::POST, "/data") => {
                let request_body = String::from_utf8_lossy(&request.body);
                (StatusCode::Ok, routes::data_body(&self.counter, &request_body)?)
            }
            // No handler runs and the tally is untouched.
            _ => (StatusCode::NotFound, routes::NOT_FOUND_BODY.to_string()),
        };

        Ok(HttpResponse::new(status)
            .with_version(request.version)
            // One request per connection, even if the client asked to keep it open.
            .with_header("Connection", "close")
            .with_content_type("application/json")
            .with_body_string(body))
    }

    /// Write the response and close the sending half.
    ///
    /// The shutdown happens whether or not the write succeeded; a write
    /// failure is reported but never retried.
    async fn write_response(&mut self, response: &HttpResponse) -> Result<(), Error> {
        let result = self.stream.write_all(&response.to_bytes()).await;

        let _ = self.stream.shutdown().await;

        result.map_err(Error::from)
    }
}
