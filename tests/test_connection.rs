//! End-to-end tests: one worker, one in-memory connection, one request.

use std::fs;
use std::path::Path;

use frankenserver::config::StaticFilesConfig;
use frankenserver::http::connection::Connection;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

fn static_config(root: &Path) -> StaticFilesConfig {
    StaticFilesConfig {
        document_root: root.to_path_buf(),
        read_timeout_secs: None,
    }
}

/// Runs one request through a worker over an in-memory duplex stream and
/// returns the raw response bytes.
async fn serve(root: &Path, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = duplex(64 * 1024);
    let conn = Connection::new(server, static_config(root));
    let handle = tokio::spawn(conn.run());

    client.write_all(request).await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    handle.await.unwrap().unwrap();
    response
}

/// Splits a raw response at the header/body boundary.
fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header/body separator");
    let head = String::from_utf8(raw[..pos].to_vec()).unwrap();
    let body = raw[pos + 4..].to_vec();
    (head, body)
}

#[tokio::test]
async fn test_round_trip_html_with_server_tag() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("index.html"), "<h1><cs371server></h1>\n").unwrap();

    let raw = serve(
        root.path(),
        b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n",
    )
    .await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: text/html"));
    assert_eq!(body, b"<h1>FrankenServer</h1>\n");
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let root = tempdir().unwrap();

    let raw = serve(root.path(), b"GET /missing.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(head.contains("Content-Type: text/html"));
    assert!(String::from_utf8(body).unwrap().contains("not found"));
}

#[tokio::test]
async fn test_png_served_byte_identical() {
    let root = tempdir().unwrap();
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend(0u8..=255);
    fs::write(root.path().join("logo.png"), &bytes).unwrap();

    let raw = serve(root.path(), b"GET /logo.png HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: image/png"));
    assert_eq!(body, bytes);
}

#[tokio::test]
async fn test_unrecognized_extension_gets_fallback_page() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("notes.bin"), "the real file content").unwrap();

    let raw = serve(root.path(), b"GET /notes.bin HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: image/bin"));
    assert!(body.contains("Server works"));
    assert!(!body.contains("the real file content"));
}

#[tokio::test]
async fn test_date_tag_substituted_in_html() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("today.html"), "<p><cs371date></p>\n").unwrap();

    let raw = serve(root.path(), b"GET /today.html HTTP/1.1\r\n\r\n").await;
    let (_, body) = split_response(&raw);
    let body = String::from_utf8(body).unwrap();

    assert!(!body.contains("<cs371date>"));
    assert!(body.starts_with("<p>"));
    assert!(body.contains("</p>"));
}

#[tokio::test]
async fn test_html_line_breaks_preserved() {
    let root = tempdir().unwrap();
    let content = "line one\nline two\r\nlast line without newline";
    fs::write(root.path().join("plain.html"), content).unwrap();

    let raw = serve(root.path(), b"GET /plain.html HTTP/1.1\r\n\r\n").await;
    let (_, body) = split_response(&raw);

    assert_eq!(body, content.as_bytes());
}

#[tokio::test]
async fn test_header_block_shape() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("index.html"), "<p>x</p>\n").unwrap();

    let raw = serve(root.path(), b"GET /index.html HTTP/1.1\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    // No blank line inside the header block, exactly one terminates it.
    assert!(head.lines().all(|l| !l.is_empty()));
    assert!(head.contains("\r\nDate: "));
    assert!(head.contains("\r\nServer: FrankenServer\r\n"));
    assert!(head.contains("\r\nConnection: close\r\n"));
    assert!(!head.contains("Content-Length"));
}

#[tokio::test]
async fn test_content_type_header_matches_resolver() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("style.css"), "body {}").unwrap();

    let raw = serve(root.path(), b"GET /style.css HTTP/1.1\r\n\r\n").await;
    let (head, _) = split_response(&raw);

    assert!(head.contains("Content-Type: image/css"));
}

#[tokio::test]
async fn test_traversal_request_is_404() {
    let outer = tempdir().unwrap();
    let root = outer.path().join("www");
    fs::create_dir(&root).unwrap();
    fs::write(outer.path().join("secret.html"), "top secret").unwrap();

    let raw = serve(&root, b"GET /../secret.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(!String::from_utf8(body).unwrap().contains("top secret"));
}

#[tokio::test]
async fn test_malformed_request_writes_nothing() {
    let root = tempdir().unwrap();
    let (mut client, server) = duplex(1024);
    let conn = Connection::new(server, static_config(root.path()));
    let handle = tokio::spawn(conn.run());

    client.write_all(b"GET /nomarker\r\n\r\n").await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    assert!(response.is_empty());
    assert!(handle.await.unwrap().is_err());
}

#[tokio::test]
async fn test_clean_disconnect_before_request() {
    let root = tempdir().unwrap();
    let (client, server) = duplex(1024);
    let conn = Connection::new(server, static_config(root.path()));
    let handle = tokio::spawn(conn.run());

    drop(client);

    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_truncated_request_is_an_error() {
    let root = tempdir().unwrap();
    let (mut client, server) = duplex(1024);
    let conn = Connection::new(server, static_config(root.path()));
    let handle = tokio::spawn(conn.run());

    // Half a request line, then hang up.
    client.write_all(b"GET /inde").await.unwrap();
    client.shutdown().await.unwrap();
    drop(client);

    assert!(handle.await.unwrap().is_err());
}

#[tokio::test]
async fn test_read_deadline_applies_to_silent_client() {
    let root = tempdir().unwrap();
    let (client, server) = duplex(1024);
    let mut config = static_config(root.path());
    config.read_timeout_secs = Some(1);
    let handle = tokio::spawn(Connection::new(server, config).run());

    // Client stays connected but never sends a byte.
    let result = handle.await.unwrap();
    assert!(result.is_err());

    drop(client);
}
