use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::data::Catalog;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    leagues: usize,
    teams: usize,
    players: usize,
}

pub async fn health_check(State(catalog): State<Arc<Catalog>>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp(),
        leagues: catalog.leagues().len(),
        teams: catalog.team_count(),
        players: catalog.player_count(),
    };

    (StatusCode::OK, Json(response))
}
