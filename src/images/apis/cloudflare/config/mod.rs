pub static FLUX_1_SCHNELL: &str = "@cf/black-forest-labs/flux-1-schnell";

pub fn api_url(base_url: &str, account_id: &str, model: &str) -> String {
    format!(
        "{}/accounts/{}/ai/run/{}",
        base_url.trim_end_matches('/'),
        account_id,
        model
    )
}
