use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    TextRequired,
    InvalidNumSteps,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TextRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Text field is required".to_string(),
            },
            Self::InvalidNumSteps => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "num_steps must be an integer".to_string(),
            },
        }
    }
}
