//! Tournament, Group and Slot.
//!
//! Instances are built by the allocation engine and are read-only afterwards.

use crate::models::participant::ParticipantId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a generated tournament.
pub type TournamentId = Uuid;

/// One (participant, team) pairing inside a group.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    participant_id: ParticipantId,
    team_id: TeamId,
}

impl Slot {
    pub fn new(participant_id: impl Into<ParticipantId>, team_id: impl Into<TeamId>) -> Self {
        Self {
            participant_id: participant_id.into(),
            team_id: team_id.into(),
        }
    }

    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }
}

/// A fixed-size group of slots. Starts with every slot empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Group {
    name: String,
    slots: Vec<Option<Slot>>,
}

impl Group {
    pub(crate) fn empty(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            slots: vec![None; size],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slots, filled or not.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Raw slot array, `None` marking a placeholder not yet assigned.
    pub fn slots(&self) -> &[Option<Slot>] {
        &self.slots
    }

    /// Filled slots in group order.
    pub fn filled_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Put `slot` at `index`. Callers fill indices in increasing order.
    pub(crate) fn assign_slot(&mut self, index: usize, slot: Slot) {
        self.slots[index] = Some(slot);
    }

    /// Reorder slots; membership is unchanged.
    pub(crate) fn shuffle_slots<R: Rng>(&mut self, rng: &mut R) {
        self.slots.shuffle(rng);
    }
}

/// A generated tournament: the filled groups plus the requested shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tournament {
    id: TournamentId,
    group_count: usize,
    group_size: usize,
    generated_at: DateTime<Utc>,
    groups: Vec<Group>,
}

impl Tournament {
    pub(crate) fn new(group_count: usize, group_size: usize, groups: Vec<Group>) -> Self {
        Self {
            id: Uuid::new_v4(),
            group_count,
            group_size,
            generated_at: Utc::now(),
            groups,
        }
    }

    pub fn id(&self) -> TournamentId {
        self.id
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Every filled slot across all groups.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.groups.iter().flat_map(Group::filled_slots)
    }

    /// Slots owned by one participant.
    pub fn slots_of<'a>(&'a self, participant_id: &'a str) -> impl Iterator<Item = &'a Slot> {
        self.slots()
            .filter(move |slot| slot.participant_id() == participant_id)
    }
}
