use chrono::{DateTime, Utc};
use serde::Serialize;

use pokegate_auth::AccessTokenClaims;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: AccessTokenClaims,
}

#[derive(Debug, Clone, Serialize)]
pub struct PokedexEntry {
    pub number: u16,
    pub name: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDataResponse {
    pub data: Vec<PokedexEntry>,
    pub received_at: DateTime<Utc>,
    pub user: AccessTokenClaims,
}

pub fn starter_pokedex() -> Vec<PokedexEntry> {
    vec![
        PokedexEntry {
            number: 1,
            name: "Bulbasaur",
            kind: "grass",
        },
        PokedexEntry {
            number: 4,
            name: "Charmander",
            kind: "fire",
        },
        PokedexEntry {
            number: 7,
            name: "Squirtle",
            kind: "water",
        },
        PokedexEntry {
            number: 25,
            name: "Pikachu",
            kind: "electric",
        },
    ]
}
