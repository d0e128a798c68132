use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError, images::apis::TextToImageInput,
    images::errors::ImagesApiError,
};

pub const DEFAULT_NUM_STEPS: i64 = 4;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(required, length(min = 1, message = "Text field is required"))]
    pub prompt: Option<String>,
    pub num_steps: Option<Value>,
}

impl GenerateImageDto {
    /// Falsy values (`null`, `false`, `0`, `""`) fall back to the default.
    /// Any integral number is forwarded unbounded, including `4.0`.
    pub fn num_steps(&self) -> Result<i64, ApiError> {
        let Some(value) = &self.num_steps else {
            return Ok(DEFAULT_NUM_STEPS);
        };

        if is_falsy(value) {
            return Ok(DEFAULT_NUM_STEPS);
        }

        match value.as_i64().or_else(|| value.as_f64().and_then(integral)) {
            Some(n) => Ok(n),
            None => Err(ImagesApiError::InvalidNumSteps.value()),
        }
    }

    pub fn to_input(&self) -> Result<TextToImageInput, ApiError> {
        Ok(TextToImageInput {
            prompt: self.prompt.clone().unwrap_or_default(),
            num_steps: self.num_steps()?,
        })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
