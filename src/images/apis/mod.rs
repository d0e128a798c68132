use axum::async_trait;
use serde::Serialize;

pub mod cloudflare;
pub mod errors;

use errors::InferenceError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextToImageInput {
    pub prompt: String,
    pub num_steps: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextToImageOutput {
    /// Base64-encoded image, passed through untouched.
    pub image: String,
}

/// A hosted text-to-image model, invoked once per request.
#[async_trait]
pub trait TextToImage: Send + Sync {
    async fn generate_image(
        &self,
        input: &TextToImageInput,
    ) -> Result<TextToImageOutput, InferenceError>;
}
