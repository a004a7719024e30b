//! MIME type detection based on file extensions.

/// Resolves the content type for a requested path.
///
/// The extension is everything after the first `.` in the path: "html" maps
/// to "text/html" and any other extension `x` maps to "image/x" ("txt"
/// yields "image/txt"). That is the whole content table, kept as-is; the
/// streamer routes unrecognized subtypes to a built-in page. A path with no
/// dot is treated as having an empty extension.
pub fn content_type_for(path: &str) -> String {
    let ext = path.find('.').map(|i| &path[i + 1..]).unwrap_or("");

    if ext == "html" {
        "text/html".to_string()
    } else {
        format!("image/{}", ext)
    }
}
