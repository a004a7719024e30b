//! HTTP protocol implementation.
//!
//! This module implements the one-request-per-connection HTTP/1.1 pipeline.
//!
//! # Architecture
//!
//! - **`connection`**: the worker owning one connection end to end
//! - **`parser`**: extracts the request line from buffered header bytes
//! - **`request`**: request-line representation
//! - **`response`**: response status selection
//! - **`writer`**: serializes the status line and header block
//! - **`mime`**: content-type resolution from the requested path
//!
//! # Request flow
//!
//! ```text
//! read bytes ──► parse request line ──► resolve file ──► write header ──► stream body ──► close
//! ```
//!
//! There is no keep-alive: a worker serves exactly one request and the
//! connection close delimits the body.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
