//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use crate::parser::{parse_request, Error, HttpRequest, HttpVersion, Method, ParseStatus};

    fn complete(input: &[u8]) -> HttpRequest {
        match parse_request(input).unwrap() {
            ParseStatus::Complete(request) => request,
            ParseStatus::Partial => panic!("expected a complete request"),
        }
    }

    fn is_partial(input: &[u8]) -> bool {
        matches!(parse_request(input), Ok(ParseStatus::Partial))
    }

    #[test]
    fn test_parse_simple_get_request() {
        let request = complete(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/index.html");
        assert_eq!(request.version, HttpVersion::Http11);
        assert_eq!(request.headers.get("Host").unwrap(), "example.com");
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let request = complete(
            b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n",
        );
        assert_eq!(request.headers.get("Host").unwrap(), "example.com");
        assert_eq!(request.headers.get("User-Agent").unwrap(), "test");
        assert_eq!(request.headers.get("Accept").unwrap(), "*/*");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = complete(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert!(request.has_header("host"));
        assert!(request.has_header("HOST"));
        assert!(request.has_header("Host"));
        assert_eq!(request.get_header("hOsT").unwrap(), "example.com");
    }

    #[test]
    fn test_parse_http_10_request() {
        let request = complete(b"GET / HTTP/1.0\r\n\r\n");
        assert_eq!(request.version, HttpVersion::Http10);
    }

    #[test]
    fn test_parse_post_request_with_body() {
        let request = complete(
            b"POST /data HTTP/1.1\r\nHost: example.com\r\nContent-Length: 19\r\n\r\n{\"message\":\"hello\"}",
        );
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/data");
        assert_eq!(request.body, b"{\"message\":\"hello\"}");
    }

    #[test]
    fn test_body_bytes_beyond_content_length_are_ignored() {
        let request = complete(b"POST /data HTTP/1.1\r\nContent-Length: 2\r\n\r\nabEXTRA");
        assert_eq!(request.body, b"ab");
    }

    #[test]
    fn test_missing_content_length_means_empty_body() {
        let request = complete(b"POST /data HTTP/1.1\r\n\r\nignored");
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_partial_until_head_terminator() {
        assert!(is_partial(b""));
        assert!(is_partial(b"GET / HT"));
        assert!(is_partial(b"GET / HTTP/1.1\r\nHost: example.com\r\n"));
    }

    #[test]
    fn test_partial_until_declared_body_arrives() {
        let head = b"POST /data HTTP/1.1\r\nContent-Length: 19\r\n\r\n";
        assert!(is_partial(head));
        assert!(is_partial(b"POST /data HTTP/1.1\r\nContent-Length: 19\r\n\r\n{\"message\":"));
    }

    #[test]
    fn test_invalid_method() {
        let result = parse_request(b"INVALID / HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "INVALID"));
    }

    #[test]
    fn test_invalid_http_version() {
        let result = parse_request(b"GET / HTTP/9.9\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_header_format() {
        let result = parse_request(b"GET / HTTP/1.1\r\nInvalidHeader\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidHeaderFormat)));
    }

    #[test]
    fn test_invalid_content_length() {
        let result = parse_request(b"POST /data HTTP/1.1\r\nContent-Length: nope\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidContentLength(ref v)) if v == "nope"));
    }
}
