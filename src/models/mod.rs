//! Data structures for tournament generation: teams, participants, tournaments, API shapes.

mod error;
mod participant;
mod request;
mod team;
mod tournament;
mod view;

pub use error::{AllocationError, MaterializeError};
pub use participant::{ParticipantId, ParticipantRequirement};
pub use request::{GenerateTourneyRequest, UserParams};
pub use team::{Team, TeamId};
pub use tournament::{Group, Slot, Tournament, TournamentId};
pub use view::{GroupView, SlotView, TournamentView};
