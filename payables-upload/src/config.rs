//! Service configuration

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8091);
const DEFAULT_DIR: &str = "uploads";
const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Runtime configuration, read once from the environment at startup.
///
/// Unparseable values fall back to the defaults with a logged warning; the
/// service starts either way.
#[derive(Debug, Clone)]
pub(crate) struct UploadConfig {
    /// Address to listen on (`PAYABLES_UPLOAD_ADDR`).
    pub addr: SocketAddr,
    /// Directory uploaded files are written to (`PAYABLES_UPLOAD_DIR`).
    pub dir: PathBuf,
    /// Maximum accepted request body size (`PAYABLES_UPLOAD_MAX_BYTES`).
    pub max_bytes: usize,
    /// Accepted receipt content types.
    pub allowed_types: Vec<String>,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        let addr = match env::var("PAYABLES_UPLOAD_ADDR") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparseable PAYABLES_UPLOAD_ADDR {:?}", raw);
                SocketAddr::from(DEFAULT_ADDR)
            }),
            Err(_) => SocketAddr::from(DEFAULT_ADDR),
        };

        let dir = env::var("PAYABLES_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DIR));

        let max_bytes = match env::var("PAYABLES_UPLOAD_MAX_BYTES") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparseable PAYABLES_UPLOAD_MAX_BYTES {:?}", raw);
                DEFAULT_MAX_BYTES
            }),
            Err(_) => DEFAULT_MAX_BYTES,
        };

        Self {
            addr,
            dir,
            max_bytes,
            allowed_types: vec![
                "application/pdf".to_string(),
                "image/jpeg".to_string(),
                "image/png".to_string(),
            ],
        }
    }

    /// Returns `true` if the content type may be stored.
    pub fn is_allowed(&self, content_type: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
    }
}
