use serde::{Deserialize, Serialize};

/// Competition grouping teams for one season
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub season: String,
}

/// Club record. The owning league is kept by the catalog, not on the team.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub founded: i64,
    pub stadium: String,
}

/// Squad member. `position_id` points into the position list but is not checked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position_id: i64,
    pub jersey_number: i64,
    pub age: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: i64,
    pub name: String,
}
