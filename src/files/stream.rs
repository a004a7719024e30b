use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::files::Resource;
use crate::files::template;
use crate::http::response::Status;

/// Body served when the requested resource does not exist.
const NOT_FOUND_PAGE: &str =
    "<html><head></head><body>\n<h3>404 resource not found</h3>\n</body></html>\n";

/// Body served for found files of unrecognized content type. The file's real
/// content is ignored for these.
const FALLBACK_PAGE: &str =
    "<html><head></head><body>\n<h3>Server works</h3>\n</body></html>\n";

/// Image subtypes whose files are copied to the client byte for byte.
const RAW_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpg", "image/gif"];

/// Writes the response body. Must be called after the header block.
///
/// The 200/404 decision was already made by resolution; open and read
/// failures here propagate as stream errors without revising it.
pub async fn write_content<W>(
    stream: &mut W,
    status: Status,
    resource: &Resource,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if status == Status::NotFound {
        stream.write_all(NOT_FOUND_PAGE.as_bytes()).await?;
        return Ok(());
    }

    if resource.content_type == "text/html" {
        write_template_lines(stream, resource).await
    } else if RAW_IMAGE_TYPES.contains(&resource.content_type.as_str()) {
        copy_raw(stream, resource).await
    } else {
        stream.write_all(FALLBACK_PAGE.as_bytes()).await?;
        Ok(())
    }
}

/// Streams an HTML file line by line through the template engine.
///
/// Lines keep their original terminators; a tag never spans a line break.
async fn write_template_lines<W>(stream: &mut W, resource: &Resource) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let file = File::open(&resource.absolute_path).await?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            break;
        }

        let substituted = template::substitute(&line);
        stream.write_all(substituted.as_bytes()).await?;
    }

    Ok(())
}

async fn copy_raw<W>(stream: &mut W, resource: &Resource) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut file = File::open(&resource.absolute_path).await?;
    tokio::io::copy(&mut file, stream).await?;

    Ok(())
}
