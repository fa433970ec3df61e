//! Byte-exact multipart/form-data parsing
//!
//! Receipts are PDFs and photos, so the parser works on raw bytes and only
//! interprets the part headers as text. It extracts the first part that
//! carries a filename; extra form fields are ignored.

use crate::error::UploadError;

/// One file part extracted from a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FilePart {
    /// Form field name the file was sent under.
    pub field: String,
    /// Client-supplied file name.
    pub file_name: String,
    /// Declared content type, defaulting to `application/octet-stream`.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// Extracts the boundary parameter from a `Content-Type` header value.
pub(crate) fn boundary_from_content_type(value: &str) -> Option<String> {
    let mut parts = value.split(';');
    if !parts.next()?.trim().eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }
    for param in parts {
        if let Some((key, val)) = param.split_once('=') {
            if key.trim().eq_ignore_ascii_case("boundary") {
                let boundary = val.trim().trim_matches('"');
                if !boundary.is_empty() {
                    return Some(boundary.to_string());
                }
            }
        }
    }
    None
}

/// Parses a multipart body and returns its first file part.
pub(crate) fn parse(body: &[u8], boundary: &str) -> Result<FilePart, UploadError> {
    let delimiter = format!("--{}", boundary).into_bytes();

    let mut markers = Vec::new();
    let mut offset = 0;
    while let Some(pos) = find(&body[offset..], &delimiter) {
        markers.push(offset + pos);
        offset += pos + delimiter.len();
    }

    if markers.len() < 2 {
        return Err(UploadError::Malformed(
            "boundary markers not found in body".to_string(),
        ));
    }

    for window in markers.windows(2) {
        let start = window[0] + delimiter.len();
        let segment = &body[start..window[1]];

        // The closing marker is "--<boundary>--"; anything after it is
        // epilogue.
        if segment.starts_with(b"--") {
            break;
        }

        let Some(segment) = segment.strip_prefix(b"\r\n") else {
            continue;
        };
        let segment = segment.strip_suffix(b"\r\n").unwrap_or(segment);

        let Some(split) = find(segment, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&segment[..split]);
        let data = &segment[split + 4..];

        let mut field = None;
        let mut file_name = None;
        let mut content_type = None;

        for line in headers.split("\r\n") {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-disposition") {
                field = disposition_param(value, "name");
                file_name = disposition_param(value, "filename");
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }

        if let Some(file_name) = file_name {
            return Ok(FilePart {
                field: field.unwrap_or_else(|| "file".to_string()),
                file_name,
                content_type: content_type
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
                data: data.to_vec(),
            });
        }
    }

    Err(UploadError::Malformed(
        "no file part in multipart body".to_string(),
    ))
}

fn disposition_param(disposition: &str, key: &str) -> Option<String> {
    for param in disposition.split(';') {
        if let Some((name, value)) = param.trim().split_once('=') {
            if name.trim().eq_ignore_ascii_case(key) {
                return Some(value.trim().trim_matches('"').to_string());
            }
        }
    }
    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
