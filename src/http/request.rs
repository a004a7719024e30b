/// HTTP request methods.
///
/// Only GET is served. Any other leading token fails to parse as a method,
/// which is how the parser tells header lines apart from the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

/// The parsed request line.
///
/// Header fields are consumed and discarded by the parser; nothing beyond
/// the method and raw path is modeled.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (always GET)
    pub method: Method,
    /// The request path exactly as sent (e.g., "/index.html")
    pub raw_path: String,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use frankenserver::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }
}
