use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// Header block is not yet complete; the caller should read more bytes.
    Incomplete,
    /// Header bytes are not valid UTF-8.
    InvalidEncoding,
    /// The header block ended without a request line.
    MissingRequestLine,
    /// A GET line too short to slice or missing the " HTTP" marker.
    MalformedRequestLine,
}

/// Extracts the request line from a buffered header block.
///
/// The block ends at the first blank line. Lines are scanned in order: the
/// first one whose leading token parses as a method is the request line, and
/// the text between "GET " and " HTTP" is captured as the raw path. Every
/// other line is read and ignored; header fields are not modeled.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    for line in headers_str.lines() {
        let token = line.split(' ').next().unwrap_or("");
        let Some(method) = Method::from_str(token) else {
            continue;
        };

        let raw_path = extract_path(line).ok_or(ParseError::MalformedRequestLine)?;

        return Ok(Request {
            method,
            raw_path: raw_path.to_string(),
        });
    }

    Err(ParseError::MissingRequestLine)
}

/// Captures the token between "GET " and " HTTP".
fn extract_path(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("GET ")?;
    let end = rest.find(" HTTP")?;
    Some(&rest[..end])
}

/// Position of the blank line ending the header block, in either CRLF or
/// bare-LF framing.
fn find_headers_end(buf: &[u8]) -> Option<usize> {
    if buf.starts_with(b"\r\n") || buf.starts_with(b"\n") {
        return Some(0);
    }

    let crlf = buf.windows(3).position(|w| w == b"\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
