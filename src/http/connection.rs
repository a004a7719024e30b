use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Duration, timeout};
use tracing::{debug, info};

use crate::config::StaticFilesConfig;
use crate::files::Resource;
use crate::files::stream;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::Status;
use crate::http::writer;

/// The worker: owns one connection for exactly one request.
///
/// Generic over the stream so tests can drive it with an in-memory duplex
/// pipe instead of a TcpStream. Holds no state beyond the request it is
/// handling; everything is dropped when the connection closes.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    config: StaticFilesConfig,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: StaticFilesConfig) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            config,
        }
    }

    /// Runs the full pipeline: parse, resolve, write header, stream body,
    /// close. Header bytes are fully written before any body bytes.
    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("Handling connection");

        let request = match self.read_request().await? {
            Some(req) => req,
            None => {
                debug!("Client disconnected before sending a request");
                return Ok(());
            }
        };

        let resource =
            Resource::resolve(&request.raw_path, &self.config.document_root).await;
        let status = Status::for_resource(resource.exists);

        info!(
            path = %request.raw_path,
            status = status.as_u16(),
            content_type = %resource.content_type,
            "Serving request"
        );

        writer::write_header(&mut self.stream, status, &resource.content_type).await?;
        stream::write_content(&mut self.stream, status, &resource).await?;

        self.stream.flush().await?;
        self.stream.shutdown().await?;

        debug!("Done handling connection");
        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        match self.config.read_timeout_secs {
            Some(secs) => timeout(Duration::from_secs(secs), self.fill_and_parse())
                .await
                .context("Timed out waiting for request")?,
            None => self.fill_and_parse().await,
        }
    }

    /// Accumulates stream bytes until the parser has a complete header block.
    ///
    /// Returns None for a client that closes cleanly before sending anything.
    async fn fill_and_parse(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parser::parse_request(&self.buffer) {
                Ok(request) => return Ok(Some(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Err(anyhow::anyhow!(
                    "connection closed before a complete request arrived"
                ));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
