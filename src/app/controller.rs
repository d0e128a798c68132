use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn method_not_allowed() -> ApiError {
    DefaultApiError::MethodNotAllowed.value()
}
