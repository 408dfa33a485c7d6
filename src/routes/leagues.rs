use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::data::Catalog;
use crate::models::League;

// GET /leagues - List all leagues
pub async fn get_leagues(State(catalog): State<Arc<Catalog>>) -> Json<Vec<League>> {
    Json(catalog.leagues().to_vec())
}
