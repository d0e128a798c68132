use serde::{Deserialize, Serialize};

/// The envelope every non-preflight response carries.
///
/// Exactly one of `image_base64` and `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn image(image_base64: String) -> Self {
        Self {
            success: true,
            image_base64: Some(image_base64),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            image_base64: None,
            error: Some(message),
        }
    }
}
