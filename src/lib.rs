//! Tournament group generator: library with models, team catalog and allocation logic.

pub mod catalog;
pub mod config;
pub mod logic;
pub mod models;
pub mod web;

pub use catalog::{CatalogError, InMemoryCatalog, SortField, TeamCatalog, NO_LIMIT};
pub use config::{Config, ConfigError};
pub use logic::{
    allocate_teams, group_by_rating, round_robin_share, Materializer, TourneyGenerator,
    DEFAULT_MIN_RATING, MAX_GROUPS,
};
pub use models::{
    AllocationError, GenerateTourneyRequest, Group, GroupView, MaterializeError, ParticipantId,
    ParticipantRequirement, Slot, SlotView, Team, TeamId, Tournament, TournamentId,
    TournamentView, UserParams,
};
