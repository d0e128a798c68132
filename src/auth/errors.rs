use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    Unauthorized,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::Unauthorized => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Unauthorized".to_string(),
            },
        }
    }
}
