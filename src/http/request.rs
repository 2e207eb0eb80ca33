use std::collections::HashMap;

/// HTTP request methods.
///
/// Only GET and POST get dedicated variants; anything else is carried
/// verbatim so the file handler can refuse it without the parser failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Create or submit data
    Post,
    /// Any other method token, kept as received
    Other(String),
}

impl Method {
    /// Parses a method token. Infallible: unknown tokens become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Header names are stored lower-cased; when the same header appears more
/// than once, the last occurrence wins.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or anything else)
    pub method: Method,
    /// The request path, always beginning with "/"
    pub path: String,
    /// Request headers, keyed by lower-cased name
    pub headers: HashMap<String, String>,
    /// Request body bytes, possibly empty
    pub body: Vec<u8>,
}

impl Request {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The Content-Length header parsed as a usize, 0 if missing or invalid.
    pub fn content_length(&self) -> usize {
        self.header("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

/// Builder for constructing Request values, mostly useful in tests.
pub struct RequestBuilder {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header. The name is lower-cased on insertion, matching the
    /// parser's storage invariant.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            headers: self.headers,
            body: self.body,
        }
    }
}
