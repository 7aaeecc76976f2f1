// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

use state::AppState;

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Recalculation triggers
        .route(
            "/api/rounds/:id/standings/recalc",
            post(handlers::standings::recalc_standings),
        )
        .route(
            "/api/seasons/:id/player-stats/recalc",
            post(handlers::stats::recalc_player_stats),
        )
        .route(
            "/api/seasons/:id/goalie-stats/recalc",
            post(handlers::stats::recalc_goalie_stats),
        )
        // Read endpoints
        .route(
            "/api/rounds/:id/standings",
            get(handlers::standings::get_standings),
        )
        .route(
            "/api/seasons/:id/player-stats",
            get(handlers::stats::get_player_stats),
        )
        .route(
            "/api/seasons/:id/goalie-stats",
            get(handlers::stats::get_goalie_stats),
        )
        // Finalization workflow
        .route("/api/games/:id/result", post(handlers::games::report_result))
        .route("/api/games/:id/postpone", post(handlers::games::postpone_game))
        .route("/api/games/:id/cancel", post(handlers::games::cancel_game))
        .with_state(state)
}
