//! Backend REST operations
//!
//! All business computation happens server-side; these operations fetch and
//! patch JSON. Each resource gets its own module; the request plumbing
//! (bearer token, timeout, error decoding) is shared below.

mod admin;
mod documents;
mod invoices;
mod matching;
pub(crate) mod multipart;
mod reimbursements;

use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::PayablesClient;
use crate::error::ApiError;
use crate::error::BackendErrorDetail;
use crate::error::Error;

/// Envelope the backend wraps error responses in.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: BackendErrorDetail,
}

impl PayablesClient {
    /// Builds a request with the session's bearer token attached.
    pub(crate) async fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, Error> {
        let url = url::Url::parse(&self.endpoint(path))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.endpoint(path), e)))?;

        let token = self.inner().session.token().await?;
        let mut request = self
            .inner()
            .http_client
            .request(method, url)
            .bearer_auth(&token.bearer);

        if let Some(timeout) = self.inner().timeout {
            request = request.timeout(timeout);
        }

        Ok(request)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self
            .authorized(Method::GET, path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;
        self.read_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self
            .authorized(Method::POST, path)
            .await?
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        self.read_json(response).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self
            .authorized(Method::PATCH, path)
            .await?
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        self.read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let response = self
            .authorized(Method::DELETE, path)
            .await?
            .send()
            .await
            .map_err(ApiError::from)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.decode_error(response).await.into())
        }
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        boundary: &str,
        body: Vec<u8>,
    ) -> Result<T, Error> {
        let response = self
            .authorized(Method::POST, path)
            .await?
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(body)
            .send()
            .await
            .map_err(ApiError::from)?;
        self.read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, Error> {
        if response.status().is_success() {
            Ok(response.json().await.map_err(ApiError::from)?)
        } else {
            Err(self.decode_error(response).await.into())
        }
    }

    /// Decodes a non-2xx response into an [`ApiError`].
    ///
    /// The backend wraps failures as `{"error": {...}}`; anything else is
    /// kept as the raw body.
    async fn decode_error(&self, response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => ApiError::http_with_detail(status, envelope.error),
            Err(_) => {
                log::debug!("unstructured {} error body: {}", status, body);
                ApiError::http(status, body)
            }
        }
    }
}
