use std::path::{Component, Path, PathBuf};

use crate::http::mime;

/// The resolved filesystem target of a request.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Document root joined with the requested path
    pub absolute_path: PathBuf,

    /// Whether a regular file is present at the resolved path
    pub exists: bool,

    /// Content type derived from the requested path's extension. Non-empty
    /// even when the file does not exist.
    pub content_type: String,
}

impl Resource {
    /// Resolves a raw request path against the document root.
    ///
    /// The leading `/` is stripped before joining. Paths with `..`
    /// components never resolve; the resource is reported missing and the
    /// client sees a 404. Existence is checked at resolution time; a file
    /// that disappears before streaming surfaces as a stream error, not a
    /// 404.
    pub async fn resolve(raw_path: &str, document_root: &Path) -> Resource {
        let content_type = mime::content_type_for(raw_path);

        let relative = raw_path.trim_start_matches('/');
        let absolute_path = document_root.join(relative);

        let exists = !escapes_root(relative) && is_regular_file(&absolute_path).await;

        Resource {
            absolute_path,
            exists,
            content_type,
        }
    }
}

/// True when the path would step above the document root.
fn escapes_root(relative: &str) -> bool {
    Path::new(relative)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
