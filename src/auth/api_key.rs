use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{app::models::api_error::ApiError, AppState};

use super::errors::AuthApiError;

pub const X_API_KEY: &str = "x-api-key";

/// Proof that the request carried the configured API key.
///
/// Extracting it fails closed: a missing, non-ASCII or mismatching header is
/// rejected with 401 before the body is read.
#[derive(Debug)]
pub struct ApiKey;

impl ApiKey {
    pub fn verify(provided: Option<&str>, expected: &str) -> Result<Self, ApiError> {
        match provided {
            Some(key) if key == expected => Ok(ApiKey),
            _ => Err(AuthApiError::Unauthorized.value()),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(X_API_KEY)
            .and_then(|value| value.to_str().ok());

        let result = ApiKey::verify(provided, &state.envy.valid_api_key);
        if result.is_err() {
            tracing::debug!("rejected request with missing or invalid api key");
        }

        result
    }
}
