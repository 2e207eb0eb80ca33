//! Request handlers and the core processing pipeline.
//!
//! `process_request` is the single entry point the connection driver calls
//! once it has framed a full request: parse, route, handle, serialize.

mod files;

use crate::config::Config;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::serialize_response;
use crate::routing::{self, Route};

const TEXT_PLAIN: &str = "text/plain";

/// Core entry point: raw request bytes in, raw response bytes out.
///
/// All protocol-level failures are converted to terminal responses here or
/// below; nothing propagates past the handler boundary.
pub async fn process_request(raw: &[u8], cfg: &Config) -> Vec<u8> {
    let response = match parser::parse_request(raw) {
        Ok(req) => handle(&req, cfg).await,
        Err(ParseError::Incomplete | ParseError::Invalid) => {
            Response::empty(StatusCode::BadRequest)
        }
    };

    serialize_response(&response)
}

/// Dispatches a parsed request to its route handler.
pub async fn handle(req: &Request, cfg: &Config) -> Response {
    match routing::resolve(&req.path) {
        Some(Route::Root) => root(),
        Some(Route::Echo) => echo(req),
        Some(Route::UserAgent) => user_agent(req),
        Some(Route::Files) => files::handle(req, cfg.directory.as_deref()).await,
        None => Response::empty(StatusCode::NotFound),
    }
}

fn root() -> Response {
    Response::empty(StatusCode::Ok)
}

/// Echoes the path suffix after `/echo/` verbatim, embedded slashes and all.
fn echo(req: &Request) -> Response {
    let text = req.path.strip_prefix("/echo/").unwrap_or_default();

    let mut builder = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", TEXT_PLAIN)
        .header("Content-Length", text.len().to_string());

    // Negotiation only: the header is advertised on a substring match but
    // the body bytes are never actually compressed.
    if req
        .header("accept-encoding")
        .is_some_and(|v| v.contains("gzip"))
    {
        builder = builder.header("Content-Encoding", "gzip");
    }

    builder.body(text.as_bytes().to_vec()).build()
}

fn user_agent(req: &Request) -> Response {
    match req.header("user-agent") {
        Some(agent) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", TEXT_PLAIN)
            .header("Content-Length", agent.len().to_string())
            .body(agent.as_bytes().to_vec())
            .build(),
        None => Response::empty(StatusCode::BadRequest),
    }
}
