//! Multipart MIME body builder for file uploads.

use uuid::Uuid;

/// Generates a unique boundary string.
pub(crate) fn generate_boundary(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Builds a single-file `multipart/form-data` body.
///
/// The file name is sanitized to keep the part header well-formed; the
/// payload bytes are passed through untouched.
pub(crate) fn build_file_body(
    boundary: &str,
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let file_name = sanitize_file_name(file_name);

    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

/// Strips path components and header-breaking characters from a file name.
pub(crate) fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    base.chars()
        .map(|c| match c {
            '"' | '\r' | '\n' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape() {
        let body = build_file_body("bnd", "file", "receipt.pdf", "application/pdf", b"%PDF-1.4");
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("--bnd\r\n"));
        assert!(text.contains(
            "Content-Disposition: form-data; name=\"file\"; filename=\"receipt.pdf\"\r\n"
        ));
        assert!(text.contains("Content-Type: application/pdf\r\n\r\n%PDF-1.4"));
        assert!(text.ends_with("\r\n--bnd--\r\n"));
    }

    #[test]
    fn test_binary_payload_passes_through() {
        let data = [0u8, 13, 10, 255, 0];
        let body = build_file_body("bnd", "file", "scan.bin", "application/octet-stream", &data);
        let needle = b"\r\n\r\n";
        let start = body
            .windows(needle.len())
            .position(|w| w == needle)
            .unwrap()
            + needle.len();
        assert_eq!(&body[start..start + data.len()], &data);
    }

    #[test]
    fn test_file_name_sanitized() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\scans\\inv.pdf"), "inv.pdf");
        assert_eq!(sanitize_file_name("we\"ird\n.pdf"), "we_ird_.pdf");
    }

    #[test]
    fn test_boundaries_are_unique() {
        assert_ne!(generate_boundary("upload"), generate_boundary("upload"));
    }
}
