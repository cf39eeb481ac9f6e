use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::SharedState;

/// Build the Axum router with all routes and middleware.
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check (outside /api prefix)
        .route("/health", get(handlers::health))
        // Reference text
        .route("/api/pieces", get(handlers::list_pieces))
        .route("/api/pieces/{kind}", get(handlers::get_piece))
        .route("/api/special-moves", get(handlers::list_special_moves))
        // Stateless move generation
        .route("/api/moves", post(handlers::generate))
        // Sessions
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/api/sessions/{id}/select", post(handlers::select_square))
        .route("/api/sessions/{id}/clear", post(handlers::clear_highlights))
        .route("/api/sessions/{id}/reset", post(handlers::reset_session))
        .route("/api/sessions/{id}/scenario", post(handlers::stage_scenario))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
