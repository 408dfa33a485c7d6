use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::data::Catalog;
use crate::error::{first_param, require_id, ApiError};
use crate::models::Player;

// GET /players?team_id=1 - List a team's squad
pub async fn get_players(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let raw = first_param(&params, "team_id");
    let team_id = require_id("team_id", raw).inspect_err(|err| {
        tracing::warn!(%err, value = raw.unwrap_or_default(), "rejected players request");
    })?;

    let players = team_id
        .map(|id| catalog.players_for_team(id))
        .unwrap_or_default();
    tracing::debug!(?team_id, count = players.len(), "players lookup");

    Ok(Json(players.to_vec()))
}
