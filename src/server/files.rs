//! Download responses for regular files.

use std::path::Path;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::error::BrowseError;

/// Build a streaming attachment response for the file at `path`.
///
/// `name` is the entry name the client asked for. It drives both the
/// download file name and the content type, so a symlink is served under
/// its own name rather than its target's.
///
/// The body is read through a [`ReaderStream`]; if the client goes away the
/// body is dropped and the file handle closed with it. The bytes sent are the
/// bytes on disk, untouched.
///
/// # Errors
///
/// - [`BrowseError::NotFound`] if the file vanished before it could be opened
/// - [`BrowseError::Io`] for permission or other I/O failures
pub async fn file_response(path: &Path, name: &str) -> Result<Response, BrowseError> {
    let path_str = path.display().to_string();

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| BrowseError::from_io(path_str.clone(), &e))?;
    let metadata = file
        .metadata()
        .await
        .map_err(|e| BrowseError::from_io(path_str.clone(), &e))?;

    let mime = mime_guess::from_path(name).first_or_octet_stream();

    debug!(
        file = %path_str,
        size = metadata.len(),
        content_type = %mime,
        "Streaming file"
    );

    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, metadata.len())
        .header(header::CONTENT_DISPOSITION, content_disposition(name))
        .body(body)
        .map_err(|e| BrowseError::Io {
            path: path_str,
            message: e.to_string(),
        })
}

/// Build a `Content-Disposition: attachment` value for `name`.
///
/// Quotes and backslashes are escaped. Names outside printable ASCII get an
/// ASCII fallback in `filename` (offending characters become `_`) and the
/// exact name in an RFC 5987 `filename*` parameter.
pub fn content_disposition(name: &str) -> HeaderValue {
    let plain = name.chars().all(|c| c.is_ascii() && !c.is_ascii_control());

    let fallback: String = name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() {
                c
            } else {
                '_'
            }
        })
        .collect();
    let quoted = fallback.replace('\\', "\\\\").replace('"', "\\\"");

    let value = if plain {
        format!("attachment; filename=\"{}\"", quoted)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            quoted,
            urlencoding::encode(name)
        )
    };

    // Only printable ASCII remains at this point.
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
