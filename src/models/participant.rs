//! Participant requirements: who takes part and which teams they must receive.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Identifier of a participant (user) as given by the caller.
pub type ParticipantId = String;

/// What one participant asks for.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRequirement {
    pub participant_id: ParticipantId,
    /// Number of teams the participant asked for. Carried through, but shares are
    /// handed out round-robin and are not bounded by it.
    pub desired_slot_count: u32,
    /// Teams that must end up in this participant's slots.
    pub required_team_ids: Vec<TeamId>,
}

impl ParticipantRequirement {
    pub fn new(
        participant_id: impl Into<ParticipantId>,
        desired_slot_count: u32,
        required_team_ids: Vec<TeamId>,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            desired_slot_count,
            required_team_ids,
        }
    }
}
