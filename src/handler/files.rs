//! File-backed GET/POST handler.
//!
//! Every filesystem failure surfaces as 404, whatever the underlying cause;
//! the client never learns whether a file was absent or unreadable.

use std::path::{Component, Path};

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const OCTET_STREAM: &str = "application/octet-stream";

pub async fn handle(req: &Request, directory: Option<&Path>) -> Response {
    let Some(dir) = directory else {
        // Serving files was never configured
        return Response::empty(StatusCode::BadRequest);
    };

    let filename = req.path.strip_prefix("/files/").unwrap_or_default();
    if !is_safe(filename) {
        return Response::empty(StatusCode::NotFound);
    }

    // Joined, never concatenated, so the name stays under the serving root
    let path = dir.join(filename);

    match req.method {
        Method::Get => match tokio::fs::read(&path).await {
            Ok(data) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", OCTET_STREAM)
                .header("Content-Length", data.len().to_string())
                .body(data)
                .build(),
            Err(_) => Response::empty(StatusCode::NotFound),
        },

        Method::Post => match tokio::fs::write(&path, &req.body).await {
            // The created response carries the filename and, deliberately,
            // no Content-Length
            Ok(()) => ResponseBuilder::new(StatusCode::Created)
                .header("Content-Type", OCTET_STREAM)
                .body(filename.as_bytes().to_vec())
                .build(),
            Err(_) => Response::empty(StatusCode::NotFound),
        },

        Method::Other(_) => Response::empty(StatusCode::NotFound),
    }
}

/// Rejects empty names and names whose components would step outside the
/// serving directory.
fn is_safe(filename: &str) -> bool {
    !filename.is_empty()
        && Path::new(filename)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_names() {
        assert!(is_safe("foo.txt"));
        assert!(is_safe("sub/foo.txt"));
        assert!(!is_safe(""));
        assert!(!is_safe("../etc/passwd"));
        assert!(!is_safe("sub/../../etc/passwd"));
        assert!(!is_safe("/etc/passwd"));
    }
}
