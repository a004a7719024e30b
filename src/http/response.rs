/// Response status for a served request.
///
/// Selected solely by whether the resolved resource exists:
/// - `Ok` (200): the file is present and will be streamed
/// - `NotFound` (404): no regular file at the resolved path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl Status {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use frankenserver::http::response::Status;
    /// assert_eq!(Status::Ok.as_u16(), 200);
    /// assert_eq!(Status::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "Not Found",
        }
    }

    /// Picks the status for a resolution outcome.
    pub fn for_resource(exists: bool) -> Self {
        if exists { Status::Ok } else { Status::NotFound }
    }
}
