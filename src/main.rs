use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    images::apis::{cloudflare::service::CloudflareAi, TextToImage},
};

mod app;
mod auth;
mod images;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub ai: Arc<dyn TextToImage>,
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!("starting in {} environment", envy.app_env);

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let ai = CloudflareAi::from_envy(&envy).expect("failed to build inference client");

    let state = AppState {
        envy: Arc::new(envy),
        ai: Arc::new(ai),
    };

    // app
    let app = app::router::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
