use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::http::parser::{ParseError, find_headers_end, parse_request};
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

// Cap on buffered bytes before the head terminator shows up.
const MAX_HEAD: usize = 64 * 1024;

/// Drives a single client connection: one request in, one response out,
/// then the socket is closed. No keep-alive.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    config: Config,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            config,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        if !self.read_request().await? {
            // Peer went away before sending a full request
            return Ok(());
        }

        let bytes = handler::process_request(&self.buffer, &self.config).await;

        let mut writer = ResponseWriter::new(bytes);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Accumulates bytes until the buffer frames one full request: head
    /// terminator found and Content-Length body bytes present. Returns
    /// false on clean EOF before that happens.
    async fn read_request(&mut self) -> anyhow::Result<bool> {
        loop {
            match parse_request(&self.buffer) {
                Ok(_) => return Ok(true),

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                // Garbled head: hand it to the core, which answers 400
                Err(ParseError::Invalid) => return Ok(true),
            }

            if find_headers_end(&self.buffer).is_none() && self.buffer.len() > MAX_HEAD {
                anyhow::bail!("request head exceeds {} bytes", MAX_HEAD);
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                // Client closed connection
                return Ok(false);
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}
