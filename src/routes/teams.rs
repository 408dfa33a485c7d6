use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::data::Catalog;
use crate::error::{first_param, require_id, ApiError};
use crate::models::Team;

// GET /teams?league_id=1 - List teams in a league
pub async fn get_teams(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let raw = first_param(&params, "league_id");
    let league_id = require_id("league_id", raw).inspect_err(|err| {
        tracing::warn!(%err, value = raw.unwrap_or_default(), "rejected teams request");
    })?;

    let teams = league_id
        .map(|id| catalog.teams_for_league(id))
        .unwrap_or_default();
    tracing::debug!(?league_id, count = teams.len(), "teams lookup");

    Ok(Json(teams.to_vec()))
}
