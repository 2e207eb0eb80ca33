use minihttp::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_header_lookup_is_case_insensitive() {
    let mut headers = HashMap::new();
    headers.insert("user-agent".to_string(), "foo/1.0".to_string());

    let req = Request {
        method: Method::Get,
        path: "/user-agent".to_string(),
        headers,
        body: vec![],
    };

    assert_eq!(req.header("user-agent"), Some("foo/1.0"));
    assert_eq!(req.header("User-Agent"), Some("foo/1.0"));
    assert_eq!(req.header("USER-AGENT"), Some("foo/1.0"));
    assert_eq!(req.header("missing"), None);
}

#[test]
fn test_content_length_parsing() {
    let req = RequestBuilder::new(Method::Post, "/files/a")
        .header("Content-Length", "42")
        .build();

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_content_length_missing_or_invalid() {
    let without = RequestBuilder::new(Method::Get, "/").build();
    assert_eq!(without.content_length(), 0);

    let invalid = RequestBuilder::new(Method::Post, "/files/a")
        .header("Content-Length", "not-a-number")
        .build();
    assert_eq!(invalid.content_length(), 0);
}

#[test]
fn test_method_parse() {
    assert_eq!(Method::parse("GET"), Method::Get);
    assert_eq!(Method::parse("POST"), Method::Post);
    assert_eq!(Method::parse("PUT"), Method::Other("PUT".to_string()));
    // Case-sensitive, as on the wire
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
}

#[test]
fn test_builder_lowercases_header_names() {
    let req = RequestBuilder::new(Method::Get, "/")
        .header("Accept-Encoding", "gzip")
        .build();

    assert!(req.headers.contains_key("accept-encoding"));
    assert!(!req.headers.contains_key("Accept-Encoding"));
}

#[test]
fn test_builder_with_body() {
    let req = RequestBuilder::new(Method::Post, "/files/a")
        .body(b"payload".to_vec())
        .build();

    assert_eq!(req.body, b"payload".to_vec());
}
