use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::post,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth::api_key::X_API_KEY, images, AppState};

use super::{controller, errors};

pub fn build_router(state: AppState) -> Router {
    // OPTIONS never reaches the handlers: the cors layer answers it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(X_API_KEY)])
        .allow_methods([Method::POST, Method::OPTIONS]);

    let images = post(images::controller::generate_image).fallback(controller::method_not_allowed);

    Router::new()
        .route("/", images.clone())
        .route("/*path", images)
        // layers
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
