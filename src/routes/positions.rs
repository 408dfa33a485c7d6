use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::data::Catalog;
use crate::models::Position;

// GET /positions - List all player positions
pub async fn get_positions(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Position>> {
    Json(catalog.positions().to_vec())
}
