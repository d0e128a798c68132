pub mod cloudflare_run_response;
