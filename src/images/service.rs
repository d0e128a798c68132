use crate::app::models::{api_error::ApiError, api_response::ApiResponse};

use super::{apis::TextToImage, dtos::generate_image_dto::GenerateImageDto};

pub async fn generate_image(
    dto: &GenerateImageDto,
    ai: &dyn TextToImage,
) -> Result<ApiResponse, ApiError> {
    let input = dto.to_input()?;
    tracing::debug!("generating image with {} steps", input.num_steps);

    match ai.generate_image(&input).await {
        Ok(output) => Ok(ApiResponse::image(output.image)),
        Err(e) => {
            tracing::error!("generate_image failed: {}", e);
            Err(e.into())
        }
    }
}
