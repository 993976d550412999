//! HTTP request parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Represents an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Create a new HTTP request with an empty body.
    pub fn new(method: Method, path: String, version: HttpVersion, headers: HashMap<String, String>) -> Self {
        Self {
            method,
            path,
            version,
            headers,
            body: Vec::new(),
        }
    }

    /// Create a new HTTP request with the given body.
    pub fn with_body(method: Method, path: String, version: HttpVersion, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let mut request = Self::new(method, path, version, headers);
        request.body = body;
        request
    }

    /// Get a header value.
    ///
    /// Headers are case-insensitive, so the lookup ignores case.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }
}

/// Outcome of parsing the bytes buffered so far on one connection.
#[derive(Debug)]
pub enum ParseStatus {
    /// The buffer held a complete request.
    Complete(HttpRequest),
    /// More bytes are needed before the request is complete.
    Partial,
}

/// Parse an HTTP request from the bytes buffered so far.
///
/// The request is complete once the head (request line and headers,
/// terminated by a blank line) has arrived along with the number of body
/// bytes declared by `Content-Length` (no header means an empty body).
/// Until then the result is [`ParseStatus::Partial`] and the caller should
/// read more bytes and try again. Bytes past the declared body length are
/// ignored: one request per connection, no pipelining.
///
/// # Arguments
///
/// * `input` - The bytes read from the connection so far
///
/// # Returns
///
/// The parsed request or a partial signal, or an error if the head is invalid
pub fn parse_request(input: &[u8]) -> Result<ParseStatus, Error> {
    // The head is complete once the blank line separating it from the body
    // has arrived.
    let head_end = match find_head_end(input) {
        Some(pos) => pos,
        None => return Ok(ParseStatus::Partial),
    };

    // Convert the head to a string
    let head = match std::str::from_utf8(&input[..head_end]) {
        Ok(s) => s,
        Err(_) => return Err(Error::MalformedRequestLine("Invalid UTF-8".to_string())),
    };

    // Split the head into lines
    let mut lines = head.lines();

    // Parse the request line
    let request_line = match lines.next() {
        Some(line) => line,
        None => return Err(Error::MalformedRequestLine(String::new())),
    };

    // Split the request line into method, path, and version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    // Parse the method
    let method = Method::from_str(parts[0])?;

    // Parse the path
    let path = parts[1].to_string();
    if path.is_empty() {
        return Err(Error::InvalidPath);
    }

    // Parse the version
    let version = HttpVersion::from_str(parts[2])?;

    // Parse the headers
    let mut headers = HashMap::new();
    for line in lines {
        // Split the line into name and value
        let parts: Vec<&str> = line.splitn(2, ':').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidHeaderFormat);
        }

        // Trim whitespace from the name and value
        let name = parts[0].trim().to_string();
        let value = parts[1].trim().to_string();

        // Add the header to the map
        headers.insert(name, value);
    }

    // Determine how many body bytes the head declares
    let content_length = match headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
    {
        Some((_, v)) => v
            .parse::<usize>()
            .map_err(|_| Error::InvalidContentLength(v.clone()))?,
        None => 0,
    };

    // Wait for the declared body to arrive in full
    let body_start = head_end + 4;
    if input.len() < body_start + content_length {
        return Ok(ParseStatus::Partial);
    }

    let body = input[body_start..body_start + content_length].to_vec();

    // Create the request
    Ok(ParseStatus::Complete(HttpRequest::with_body(
        method, path, version, headers, body,
    )))
}

/// Find the position of the `\r\n\r\n` head terminator.
fn find_head_end(input: &[u8]) -> Option<usize> {
    input.windows(4).position(|window| window == b"\r\n\r\n")
}
