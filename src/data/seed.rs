use std::collections::HashMap;

use crate::models::{League, Player, Position, Team};

fn league(id: i64, name: &str, country: &str, season: &str) -> League {
    League {
        id,
        name: name.to_string(),
        country: country.to_string(),
        season: season.to_string(),
    }
}

fn team(id: i64, name: &str, city: &str, founded: i64, stadium: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        city: city.to_string(),
        founded,
        stadium: stadium.to_string(),
    }
}

fn player(id: i64, name: &str, position_id: i64, jersey_number: i64, age: i64) -> Player {
    Player {
        id,
        name: name.to_string(),
        position_id,
        jersey_number,
        age,
    }
}

fn position(id: i64, name: &str) -> Position {
    Position {
        id,
        name: name.to_string(),
    }
}

pub fn leagues() -> Vec<League> {
    vec![
        league(1, "Premier League", "England", "2024-25"),
        league(2, "La Liga", "Spain", "2024-25"),
        league(3, "Serie A", "Italy", "2024-25"),
        league(4, "Bundesliga", "Germany", "2024-25"),
    ]
}

/// Teams keyed by league id. The Bundesliga has no seeded teams.
pub fn teams_by_league() -> HashMap<i64, Vec<Team>> {
    HashMap::from([
        (
            1,
            vec![
                team(1, "Manchester United", "Manchester", 1878, "Old Trafford"),
                team(2, "Liverpool FC", "Liverpool", 1892, "Anfield"),
                team(3, "Arsenal FC", "London", 1886, "Emirates Stadium"),
                team(4, "Chelsea FC", "London", 1905, "Stamford Bridge"),
            ],
        ),
        (
            2,
            vec![
                team(5, "Real Madrid", "Madrid", 1902, "Santiago Bernabéu"),
                team(6, "FC Barcelona", "Barcelona", 1899, "Camp Nou"),
                team(7, "Atletico Madrid", "Madrid", 1903, "Wanda Metropolitano"),
            ],
        ),
        (
            3,
            vec![
                team(8, "Juventus", "Turin", 1897, "Allianz Stadium"),
                team(9, "AC Milan", "Milan", 1899, "San Siro"),
            ],
        ),
    ])
}

/// Players keyed by team id. Only Manchester United and Liverpool have squads.
pub fn players_by_team() -> HashMap<i64, Vec<Player>> {
    HashMap::from([
        (
            1,
            vec![
                player(1, "Marcus Rashford", 4, 10, 27),
                player(2, "Bruno Fernandes", 3, 8, 30),
                player(3, "Harry Maguire", 2, 5, 31),
                player(4, "Andre Onana", 1, 24, 28),
                player(5, "Casemiro", 3, 18, 32),
                player(6, "Antony", 4, 21, 24),
                player(7, "Luke Shaw", 2, 23, 29),
                player(8, "Jadon Sancho", 4, 25, 24),
                player(9, "Raphael Varane", 2, 19, 31),
                player(10, "Mason Mount", 3, 7, 26),
                player(11, "Diogo Dalot", 2, 20, 25),
            ],
        ),
        (
            2,
            vec![
                player(12, "Mohamed Salah", 4, 11, 32),
                player(13, "Virgil van Dijk", 2, 4, 33),
                player(14, "Sadio Mane", 4, 10, 32),
                player(15, "Alisson Becker", 1, 1, 31),
            ],
        ),
    ])
}

pub fn positions() -> Vec<Position> {
    vec![
        position(1, "Goalkeeper"),
        position(2, "Defender"),
        position(3, "Midfielder"),
        position(4, "Forward"),
    ]
}
