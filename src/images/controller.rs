use axum::{extract::State, Json};
use axum_macros::debug_handler;
use validator::Validate;

use crate::{
    app::models::{
        api_error::ApiError, api_response::ApiResponse, json_from_request::JsonFromRequest,
    },
    auth::api_key::ApiKey,
    AppState,
};

use super::{dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError, service};

#[debug_handler]
pub async fn generate_image(
    State(state): State<AppState>,
    _api_key: ApiKey,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<ApiResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_image(&dto, state.ai.as_ref()).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(_) => Err(ImagesApiError::TextRequired.value()),
    }
}
