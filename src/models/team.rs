//! Team records as served by the team catalog.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a team.
pub type TeamId = String;

/// A team from the catalog. Identity is by `id`; allocation only reads `rating`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub league: String,
    pub rating: f64,
}

impl Team {
    pub fn new(
        id: impl Into<TeamId>,
        name: impl Into<String>,
        league: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            league: league.into(),
            rating,
        }
    }
}
