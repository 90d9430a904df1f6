//! Materialized output: tournaments with team ids resolved to full team records.

use crate::models::team::Team;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub user_id: String,
    pub team: Team,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupView {
    pub name: String,
    pub team_slots: Vec<SlotView>,
}

/// Response shape for one generated tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentView {
    pub id: TournamentId,
    pub groups_count: usize,
    pub teams_per_group: usize,
    pub generated_at: DateTime<Utc>,
    pub groups: Vec<GroupView>,
}
