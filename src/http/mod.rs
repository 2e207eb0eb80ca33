//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! keep-alive, no chunked bodies, GET and POST only at the handler level.
//!
//! - **`connection`**: per-socket driver; frames one request, answers it, closes
//! - **`parser`**: turns a raw byte buffer into a [`request::Request`]
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder
//! - **`writer`**: serializes responses and writes them to the client

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
