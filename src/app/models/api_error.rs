use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::api_response::ApiResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(ApiResponse::error(self.message))).into_response()
    }
}
