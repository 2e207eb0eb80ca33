//! minihttp - One-shot HTTP/1.1 server
//!
//! Core library for request parsing, routing and handling.

pub mod config;
pub mod handler;
pub mod http;
pub mod routing;
pub mod server;
