use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub valid_api_key: String,

    pub cloudflare_account_id: String,
    pub cloudflare_api_token: String,
    #[serde(default = "default_cloudflare_api_url")]
    pub cloudflare_api_url: String,
    pub inference_timeout_secs: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_cloudflare_api_url() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn optional_variables_fall_back_to_defaults() {
        let envy = envy::from_iter::<_, Envy>(vars(&[
            ("VALID_API_KEY", "secret"),
            ("CLOUDFLARE_ACCOUNT_ID", "account"),
            ("CLOUDFLARE_API_TOKEN", "token"),
        ]))
        .unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.port, None);
        assert_eq!(envy.valid_api_key, "secret");
        assert_eq!(envy.cloudflare_api_url, "https://api.cloudflare.com/client/v4");
        assert_eq!(envy.inference_timeout_secs, None);
    }

    #[test]
    fn optional_variables_are_read_when_present() {
        let envy = envy::from_iter::<_, Envy>(vars(&[
            ("APP_ENV", "production"),
            ("PORT", "8080"),
            ("VALID_API_KEY", "secret"),
            ("CLOUDFLARE_ACCOUNT_ID", "account"),
            ("CLOUDFLARE_API_TOKEN", "token"),
            ("CLOUDFLARE_API_URL", "http://127.0.0.1:8787/client/v4"),
            ("INFERENCE_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(envy.app_env, "production");
        assert_eq!(envy.port, Some(8080));
        assert_eq!(
            envy.cloudflare_api_url,
            "http://127.0.0.1:8787/client/v4"
        );
        assert_eq!(envy.inference_timeout_secs, Some(30));
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = envy::from_iter::<_, Envy>(vars(&[
            ("CLOUDFLARE_ACCOUNT_ID", "account"),
            ("CLOUDFLARE_API_TOKEN", "token"),
        ]));

        assert!(result.is_err());
    }
}
