use std::time::Duration;

use axum::async_trait;
use reqwest::StatusCode;

use crate::{
    app::envy::Envy,
    images::apis::{errors::InferenceError, TextToImage, TextToImageInput, TextToImageOutput},
};

use super::{
    config::{api_url, FLUX_1_SCHNELL},
    structs::cloudflare_run_response::CloudflareRunResponse,
};

/// Workers AI client bound to a single text-to-image model.
#[derive(Debug, Clone)]
pub struct CloudflareAi {
    client: reqwest::Client,
    url: String,
    api_token: String,
}

impl CloudflareAi {
    pub fn from_envy(envy: &Envy) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = envy.inference_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: api_url(
                &envy.cloudflare_api_url,
                &envy.cloudflare_account_id,
                FLUX_1_SCHNELL,
            ),
            api_token: envy.cloudflare_api_token.to_string(),
        })
    }
}

#[async_trait]
impl TextToImage for CloudflareAi {
    async fn generate_image(
        &self,
        input: &TextToImageInput,
    ) -> Result<TextToImageOutput, InferenceError> {
        let result = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_token)
            .json(input)
            .send()
            .await;

        match result {
            Ok(res) => {
                let status = res.status();
                match res.text().await {
                    Ok(text) => parse_run_response(status, &text),
                    Err(e) => {
                        tracing::warn!("generate_image failed reading body: {:?}", e);
                        Err(InferenceError::Failed(e.to_string()))
                    }
                }
            }
            Err(e) => {
                tracing::warn!("generate_image failed sending request: {:?}", e);
                Err(InferenceError::Failed(e.to_string()))
            }
        }
    }
}

fn parse_run_response(status: StatusCode, text: &str) -> Result<TextToImageOutput, InferenceError> {
    match serde_json::from_str::<CloudflareRunResponse>(text) {
        Ok(response) => {
            let output = response.into_output();
            if let Err(e) = &output {
                tracing::warn!("generate_image rejected by provider ({}): {}", status, e);
            }
            output
        }
        Err(e) => {
            tracing::warn!("generate_image got unreadable body ({}): {:?}", status, e);
            Err(InferenceError::Failed(format!(
                "inference request failed with status {}",
                status.as_u16()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_image() {
        let text = r#"{"result":{"image":"abc123"},"success":true,"errors":[],"messages":[]}"#;

        let output = parse_run_response(StatusCode::OK, text).unwrap();

        assert_eq!(output.image, "abc123");
    }

    #[test]
    fn provider_error_message_is_surfaced() {
        let text = r#"{"result":null,"success":false,"errors":[{"code":3036,"message":"rate limited"}],"messages":[]}"#;

        let err = parse_run_response(StatusCode::TOO_MANY_REQUESTS, text).unwrap_err();

        assert_eq!(err, InferenceError::Failed("rate limited".to_string()));
    }

    #[test]
    fn first_of_several_errors_wins() {
        let text = r#"{"success":false,"errors":[{"code":1,"message":"first"},{"code":2,"message":"second"}]}"#;

        let err = parse_run_response(StatusCode::BAD_REQUEST, text).unwrap_err();

        assert_eq!(err.message(), "first");
    }

    #[test]
    fn failure_without_errors_is_unknown() {
        let text = r#"{"success":false,"errors":[]}"#;

        let err = parse_run_response(StatusCode::INTERNAL_SERVER_ERROR, text).unwrap_err();

        assert_eq!(err, InferenceError::Unknown);
    }

    #[test]
    fn success_without_image_is_unknown() {
        let text = r#"{"result":{},"success":true,"errors":[]}"#;

        let err = parse_run_response(StatusCode::OK, text).unwrap_err();

        assert_eq!(err.message(), "Unknown error");
    }

    #[test]
    fn non_json_body_reports_status() {
        let err = parse_run_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();

        assert_eq!(
            err,
            InferenceError::Failed("inference request failed with status 502".to_string())
        );
    }

    #[test]
    fn client_targets_configured_account() {
        let envy = Envy {
            app_env: "test".to_string(),
            port: None,
            valid_api_key: "secret".to_string(),
            cloudflare_account_id: "account".to_string(),
            cloudflare_api_token: "token".to_string(),
            cloudflare_api_url: "http://127.0.0.1:8787/client/v4".to_string(),
            inference_timeout_secs: Some(5),
        };

        let ai = CloudflareAi::from_envy(&envy).unwrap();

        assert_eq!(
            ai.url,
            "http://127.0.0.1:8787/client/v4/accounts/account/ai/run/@cf/black-forest-labs/flux-1-schnell"
        );
    }
}
