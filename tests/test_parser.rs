use minihttp::http::parser::{ParseError, parse_request};
use minihttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/a.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Post);
    assert_eq!(parsed.path, "/files/a.txt");
    assert_eq!(parsed.body, b"hello".to_vec());
}

#[test]
fn test_parse_headers_are_lowercased() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\nUSER-AGENT: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("user-agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("accept").unwrap(), "*/*");
    assert!(!parsed.headers.contains_key("USER-AGENT"));
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("x-tag").unwrap(), "second");
}

#[test]
fn test_parse_malformed_header_is_dropped() {
    // No ": " separator on the second line; the request still parses and
    // the broken line simply disappears.
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: ok\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("host").unwrap(), "ok");
}

#[test]
fn test_parse_header_without_space_after_colon_is_dropped() {
    let req = b"GET / HTTP/1.1\r\nX-Test:1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert!(parsed.headers.is_empty());
}

#[test]
fn test_parse_unknown_method_is_carried_verbatim() {
    let req = b"DELETE /files/x HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("DELETE".to_string()));
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_empty_request_line_is_invalid() {
    let req = b"\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Invalid)));
}

#[test]
fn test_parse_non_utf8_head_is_invalid() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Invalid)));
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_body_nul_bytes_are_stripped() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00a\x00b";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.body, b"ab".to_vec());
}

#[test]
fn test_parse_body_stops_at_content_length() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.body, b"abc".to_vec());
}

#[test]
fn test_parse_path_with_query_string_preserved() {
    let req = b"GET /echo/hi?q=rust HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/hi?q=rust");
}
