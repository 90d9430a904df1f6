//! Request body for tournament generation.

use crate::models::participant::ParticipantRequirement;
use serde::{Deserialize, Serialize};

/// One user entry of a generation request.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct UserParams {
    pub user_id: String,
    #[serde(default)]
    pub teams_count: u32,
    #[serde(default)]
    pub required_teams: Vec<String>,
}

/// Body of `POST /tourneys`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerateTourneyRequest {
    pub groups_count: usize,
    pub teams_per_group: usize,
    /// Empty means every league.
    #[serde(default)]
    pub leagues: Vec<String>,
    pub users: Vec<UserParams>,
}

impl GenerateTourneyRequest {
    /// Participant requirements in request order.
    pub fn requirements(&self) -> Vec<ParticipantRequirement> {
        self.users
            .iter()
            .map(|u| {
                ParticipantRequirement::new(
                    u.user_id.clone(),
                    u.teams_count,
                    u.required_teams.clone(),
                )
            })
            .collect()
    }
}
