use std::fmt;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The provider or the transport reported a message.
    Failed(String),
    /// The call failed without anything worth showing the caller.
    Unknown,
}

impl InferenceError {
    pub fn message(&self) -> String {
        match self {
            Self::Failed(message) => message.to_string(),
            Self::Unknown => "Unknown error".to_string(),
        }
    }
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InferenceError {}

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        ApiError::internal(e.message())
    }
}
