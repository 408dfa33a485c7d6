use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::data::Catalog;

pub mod health;
pub mod leagues;
pub mod players;
pub mod positions;
pub mod teams;

/// Prefix the football frontend uses for the reference endpoints.
pub const EXTERNAL_PREFIX: &str = "/api/external";

fn reference_routes() -> Router<Arc<Catalog>> {
    Router::new()
        .route("/leagues", get(leagues::get_leagues))
        .route("/teams", get(teams::get_teams))
        .route("/players", get(players::get_players))
        .route("/positions", get(positions::get_positions))
}

/// Build the full application router over a shared catalog.
///
/// Reference endpoints are served both at the root and under
/// [`EXTERNAL_PREFIX`]. CORS and tracing apply to every route.
pub fn app(catalog: Arc<Catalog>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Football Reference API - v1.0" }))
        .route("/health", get(health::health_check))
        .merge(reference_routes())
        .nest(EXTERNAL_PREFIX, reference_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
