use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::error::handle_panic;
use crate::api::handlers;
use crate::api::state::AppState;

/// API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 TEAM FINANCIALS
        // ========================================
        .route(
            "/api/teams",
            get(handlers::d400_team_financials::list_teams),
        )
        .route(
            "/api/revenues",
            get(handlers::d400_team_financials::list_revenues),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
