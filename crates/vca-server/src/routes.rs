//! Router assembly

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{get_response, health_check, veterinary_assist, veterinary_chat};
use crate::state::AppState;

/// Create the application router
///
/// Routes:
/// - POST /veterinary-assist - chat with optional image upload (JSON or multipart)
/// - POST /veterinary-chat - JSON chat
/// - POST /get_response/ - minimal query surface
/// - GET /health - liveness probe
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/veterinary-assist", post(veterinary_assist))
        .route("/veterinary-chat", post(veterinary_chat))
        .route("/get_response/", post(get_response))
        .route("/health", get(health_check))
        // The browser frontend is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
