use chrono::Utc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Status;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Fixed server name, used for the Server header and the server template tag.
pub const SERVER_NAME: &str = "FrankenServer";

/// Serializes the status line and header block.
///
/// No Content-Length is emitted; the body is delimited by connection close.
fn serialize_header(status: Status, content_type: &str) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
    buf.extend_from_slice(format!("Date: {}\r\n", date).as_bytes());
    buf.extend_from_slice(format!("Server: {}\r\n", SERVER_NAME).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes the full header block to the stream.
///
/// The block is serialized first and written in one call, so header bytes
/// always precede body bytes on the wire.
pub async fn write_header<W>(
    stream: &mut W,
    status: Status,
    content_type: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream
        .write_all(&serialize_header(status, content_type))
        .await?;

    Ok(())
}
