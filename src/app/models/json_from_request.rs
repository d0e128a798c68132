use axum::{
    async_trait,
    body::HttpBody,
    extract::{rejection::BytesRejection, FromRequest},
    http::Request,
    BoxError,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::api_error::ApiError;

/// JSON body extractor whose failures render as the error envelope.
///
/// The body is parsed regardless of `Content-Type`. Buffering and parse
/// failures are 500s carrying the underlying message.
pub struct JsonFromRequest<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for JsonFromRequest<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(JsonFromRequest(value)),
            Err(e) => {
                tracing::debug!("malformed json body: {}", e);
                Err(ApiError::internal(e.to_string()))
            }
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        tracing::debug!("failed to read request body: {}", e);
        ApiError::internal(e.body_text())
    }
}
