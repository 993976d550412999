//! The two fixed route handlers.
//!
//! Both handlers map a request body (or nothing) to a JSON-formatted string
//! and tick the shared request tally exactly once. They are total over their
//! inputs: malformed input produces an empty extraction, never an error.

use serde::Serialize;

use crate::counter::RequestCounter;
use crate::server::error::Error;

/// Fixed body returned by the dispatch fallback when no route matches.
pub const NOT_FOUND_BODY: &str = "{\"error\": \"Not Found\"}";

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
    requests_handled: usize,
}

#[derive(Serialize)]
struct DataBody<'a> {
    status: &'a str,
    message: &'a str,
    processed_length: usize,
}

/// Handler for `GET /`.
///
/// Ticks the shared tally and reports the pre-increment value: the number of
/// requests handled strictly before this one.
pub fn index_body(counter: &RequestCounter) -> Result<String, Error> {
    let handled = counter.increment_and_get();
    let body = StatusBody {
        status: "success",
        requests_handled: handled,
    };
    Ok(serde_json::to_string(&body)?)
}

/// Handler for `POST /data`.
///
/// Extracts the `message` field from the request body, ticks the shared
/// tally (the value is not embedded in the response), and echoes the message
/// along with its length. `processed_length` counts bytes, not characters.
pub fn data_body(counter: &RequestCounter, request_body: &str) -> Result<String, Error> {
    let message = extract_message(request_body);
    counter.increment_and_get();
    let body = DataBody {
        status: "success",
        message,
        processed_length: message.len(),
    };
    Ok(serde_json::to_string(&body)?)
}

/// Extract the value of the top-level string field named `message`.
///
/// A tolerant scan rather than a JSON parser: the first occurrence of the
/// key, the first colon after it, the first quoted run after that. If any
/// piece is missing the result is the empty string; malformed input never
/// fails.
pub fn extract_message(json: &str) -> &str {
    scan_message(json).unwrap_or("")
}

fn scan_message(json: &str) -> Option<&str> {
    let after_key = &json[json.find("\"message\"")? + "\"message\"".len()..];
    let after_colon = &after_key[after_key.find(':')? + 1..];
    let value = &after_colon[after_colon.find('"')? + 1..];
    let end = value.find('"')?;
    Some(&value[..end])
}
