//! HTTP server and upload handler

use std::convert::Infallible;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use http_body_util::BodyExt;
use http_body_util::Full;
use http_body_util::LengthLimitError;
use http_body_util::Limited;
use hyper::Method;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde::Serialize;
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::multipart;

/// Metadata returned for a stored receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    id: Uuid,
    file_name: String,
    content_type: String,
    size_bytes: u64,
    kind: &'static str,
    stored_as: String,
    uploaded_at: DateTime<Utc>,
}

/// Binds the listener and serves connections until the process exits.
pub(crate) async fn run(config: UploadConfig) -> Result<(), std::io::Error> {
    tokio::fs::create_dir_all(&config.dir).await?;

    let listener = TcpListener::bind(config.addr).await?;
    let local_addr = listener.local_addr()?;
    log::info!(
        "upload endpoint listening on {} (dir {:?}, cap {} bytes)",
        local_addr,
        config.dir,
        config.max_bytes
    );

    let config = Arc::new(config);
    loop {
        let (stream, remote) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let config = config.clone();

        tokio::spawn(async move {
            let service =
                service_fn(move |req: Request<Incoming>| handle(req, config.clone()));

            // Connection errors are not critical (clients may hang up early).
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                log::debug!("connection from {} ended with error: {}", remote, e);
            }
        });
    }
}

async fn handle(
    req: Request<Incoming>,
    config: Arc<UploadConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = match (req.method(), req.uri().path()) {
        (&Method::GET, "/healthz") => {
            json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
        }
        (&Method::POST, "/upload") => match store_upload(req, &config).await {
            Ok(stored) => {
                log::info!(
                    "stored {} as {} ({} bytes)",
                    stored.file_name,
                    stored.stored_as,
                    stored.size_bytes
                );
                match serde_json::to_value(&stored) {
                    Ok(body) => json_response(StatusCode::CREATED, body),
                    Err(e) => error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "encode_failure",
                        &e.to_string(),
                    ),
                }
            }
            Err(e) => {
                log::warn!("upload rejected: {}", e);
                error_response(e.status(), e.code(), &e.to_string())
            }
        },
        _ => error_response(StatusCode::NOT_FOUND, "not_found", "No such endpoint"),
    };

    Ok(response)
}

async fn store_upload(
    req: Request<Incoming>,
    config: &UploadConfig,
) -> Result<StoredDocument, UploadError> {
    let boundary = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(multipart::boundary_from_content_type)
        .ok_or(UploadError::MissingBoundary)?;

    let limit = config.max_bytes;
    let body = Limited::new(req.into_body(), limit);
    let bytes = body
        .collect()
        .await
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                UploadError::TooLarge { limit }
            } else {
                UploadError::Malformed("failed to read request body".to_string())
            }
        })?
        .to_bytes();

    let part = multipart::parse(&bytes, &boundary)?;
    if !config.is_allowed(&part.content_type) {
        return Err(UploadError::UnsupportedType(part.content_type));
    }

    let id = Uuid::new_v4();
    let stored_as = match part.file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.len() <= 8 => format!("{}.{}", id, ext),
        _ => id.to_string(),
    };
    tokio::fs::write(config.dir.join(&stored_as), &part.data).await?;

    Ok(StoredDocument {
        id,
        file_name: part.file_name,
        content_type: part.content_type,
        size_bytes: part.data.len() as u64,
        kind: "receipt",
        stored_as,
        uploaded_at: Utc::now(),
    })
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("static response parts are valid")
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response<Full<Bytes>> {
    json_response(
        status,
        serde_json::json!({ "error": { "code": code, "message": message } }),
    )
}
