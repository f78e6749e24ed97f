//! Route definitions for the football stats API.

pub mod goalkeepers;
pub mod health;
pub mod leagues;
pub mod players;
pub mod summary;
pub mod teams;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the full application router: health probes plus the `/api` tree.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/leagues", get(leagues::list))
        .route("/leagues/{competition_id}/teams", get(leagues::teams))
        .route(
            "/leagues/{competition_id}/goalkeepers",
            get(goalkeepers::by_league),
        )
        .route("/teams/{team_id}/players", get(teams::players))
        .route("/player/{player_id}", get(players::get_by_id))
        .route("/players/{player_id}", get(players::get_by_id))
        .route("/goalkeepers", get(goalkeepers::list))
        .route("/summary", get(summary::landing));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api", api_routes)
        .layer(cors_layer(&state.config.frontend_url))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Read-only CORS policy for the dashboard origin.
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(error = %e, frontend_url, "Invalid FRONTEND_URL, CORS origin not set");
            cors
        }
    }
}
