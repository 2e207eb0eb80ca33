use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    /// More bytes are needed before the buffer holds a full request.
    Incomplete,
    /// The request head is not decodable as an HTTP request line.
    Invalid,
}

/// Parses one complete HTTP request out of `buf`.
///
/// Framing: the head must end with a blank CRLF line, and the body must hold
/// at least Content-Length bytes; otherwise `Incomplete` is returned so the
/// caller can read more. Over a complete buffer the parser is lenient:
/// header lines without a `": "` separator are dropped, duplicate headers
/// keep the last value, unknown methods parse as [`Method::Other`], and NUL
/// bytes embedded in the body are stripped.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::Invalid)?;
    let body_bytes = &buf[headers_end + 4..];

    let mut lines = head.split("\r\n");

    // Request line: METHOD SP PATH SP VERSION
    let request_line = lines.next().ok_or(ParseError::Invalid)?;
    let mut parts = request_line.split_whitespace();

    let method = Method::parse(parts.next().ok_or(ParseError::Invalid)?);
    let path = parts.next().ok_or(ParseError::Invalid)?.to_string();

    // Headers: name lower-cased, last duplicate wins
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((name, value)) = line.split_once(": ") {
            headers.insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length]
        .iter()
        .copied()
        .filter(|&b| b != 0)
        .collect();

    Ok(Request {
        method,
        path,
        headers,
        body,
    })
}

/// Byte offset of the `\r\n\r\n` head terminator, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
