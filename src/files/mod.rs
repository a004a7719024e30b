//! Static file serving.
//!
//! This module turns a raw request path into bytes on the wire: resolving
//! the path under the document root, streaming the body, and substituting
//! serve-time template tags in HTML.

pub mod resource;
pub mod stream;
pub mod template;

pub use resource::Resource;
