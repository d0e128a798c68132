use serde::Deserialize;

use crate::images::apis::{errors::InferenceError, TextToImageOutput};

#[derive(Debug, Deserialize)]
pub struct CloudflareRunResponse {
    #[serde(default)]
    pub success: bool,
    pub result: Option<CloudflareRunResult>,
    #[serde(default)]
    pub errors: Vec<CloudflareMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareRunResult {
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareMessage {
    pub message: String,
}

impl CloudflareRunResponse {
    pub fn into_output(self) -> Result<TextToImageOutput, InferenceError> {
        if !self.success {
            return match self.errors.into_iter().next() {
                Some(error) => Err(InferenceError::Failed(error.message)),
                None => Err(InferenceError::Unknown),
            };
        }

        match self.result.and_then(|result| result.image) {
            Some(image) => Ok(TextToImageOutput { image }),
            None => Err(InferenceError::Unknown),
        }
    }
}
