use std::num::IntErrorKind;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),
    #[error("{0} parameter must be an integer")]
    InvalidParameter(&'static str),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// First value of `name` in a decoded query string. Later repeats are ignored.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Parse a required integer query parameter.
///
/// An absent or blank value is reported as missing, and anything that is not
/// an integer as invalid. An integer outside the `i64` range is well formed
/// but cannot name any record, so it comes back as `Ok(None)`.
pub fn require_id(name: &'static str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingParameter(name))?;

    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(ApiError::InvalidParameter(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_and_blank_are_missing() {
        assert_eq!(
            require_id("league_id", None),
            Err(ApiError::MissingParameter("league_id"))
        );
        assert_eq!(
            require_id("league_id", Some("  ")),
            Err(ApiError::MissingParameter("league_id"))
        );
    }

    #[test]
    fn non_integer_is_invalid() {
        assert_eq!(
            require_id("team_id", Some("abc")),
            Err(ApiError::InvalidParameter("team_id"))
        );
        assert_eq!(
            require_id("team_id", Some("1.5")),
            Err(ApiError::InvalidParameter("team_id"))
        );
        assert_eq!(
            require_id("team_id", Some("1e3")),
            Err(ApiError::InvalidParameter("team_id"))
        );
    }

    #[test]
    fn integers_parse() {
        assert_eq!(require_id("team_id", Some("1")), Ok(Some(1)));
        assert_eq!(require_id("team_id", Some("-3")), Ok(Some(-3)));
    }

    #[test]
    fn out_of_range_integers_match_nothing() {
        assert_eq!(require_id("league_id", Some("99999999999999999999")), Ok(None));
        assert_eq!(require_id("league_id", Some("-99999999999999999999")), Ok(None));
    }

    #[test]
    fn first_param_ignores_repeats() {
        let query = pairs(&[("team_id", "2"), ("league_id", "1"), ("team_id", "7")]);
        assert_eq!(first_param(&query, "team_id"), Some("2"));
        assert_eq!(first_param(&query, "league_id"), Some("1"));
        assert_eq!(first_param(&query, "season"), None);
    }

    #[test]
    fn messages_match_response_bodies() {
        assert_eq!(
            ApiError::MissingParameter("league_id").to_string(),
            "league_id parameter is required"
        );
        assert_eq!(
            ApiError::InvalidParameter("team_id").to_string(),
            "team_id parameter must be an integer"
        );
    }
}
