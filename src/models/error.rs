//! Errors raised while allocating teams and materializing results.

use crate::catalog::CatalogError;
use crate::models::participant::ParticipantId;
use crate::models::team::TeamId;

/// Errors that can occur while generating a tournament.
#[derive(Clone, Debug, PartialEq)]
pub enum AllocationError {
    /// Group count must be at least 1.
    ZeroGroups,
    /// Group size must be at least 1.
    ZeroGroupSize,
    /// Groups are named a..z, so at most 26 of them.
    TooManyGroups { max: usize, requested: usize },
    /// At least one participant is needed.
    NoParticipants,
    /// Two requirements share the same participant id.
    DuplicateParticipant(ParticipantId),
    /// The same team is required by more than one participant.
    DuplicateRequiredTeam(TeamId),
    /// Required teams the catalog does not know.
    MissingRequiredTeams(Vec<TeamId>),
    /// A participant requires more teams than the round-robin hands them.
    TooManyRequiredTeams {
        participant: ParticipantId,
        required: usize,
        share: usize,
    },
    /// Fewer distinct teams than slots to fill.
    InsufficientTeams { needed: usize, available: usize },
    /// The team catalog failed or returned malformed data.
    Catalog(CatalogError),
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationError::ZeroGroups => write!(f, "Need at least 1 group"),
            AllocationError::ZeroGroupSize => write!(f, "Need at least 1 team per group"),
            AllocationError::TooManyGroups { max, requested } => {
                write!(f, "At most {} groups are supported (requested {})", max, requested)
            }
            AllocationError::NoParticipants => write!(f, "Need at least 1 participant"),
            AllocationError::DuplicateParticipant(id) => {
                write!(f, "Participant `{}` is listed more than once", id)
            }
            AllocationError::DuplicateRequiredTeam(id) => {
                write!(f, "Team `{}` is required by more than one participant", id)
            }
            AllocationError::MissingRequiredTeams(ids) => {
                write!(f, "Required teams not found in catalog: {}", ids.join(", "))
            }
            AllocationError::TooManyRequiredTeams {
                participant,
                required,
                share,
            } => write!(
                f,
                "Participant `{}` requires {} teams but only gets {} slots",
                participant, required, share
            ),
            AllocationError::InsufficientTeams { needed, available } => {
                write!(f, "Need {} teams but only {} are available", needed, available)
            }
            AllocationError::Catalog(e) => write!(f, "Team catalog error: {}", e),
        }
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocationError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for AllocationError {
    fn from(e: CatalogError) -> Self {
        AllocationError::Catalog(e)
    }
}

/// Errors that can occur while resolving a tournament's team ids.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterializeError {
    /// The batched team lookup failed.
    Catalog(CatalogError),
    /// A slot references a team the lookup did not return.
    UnresolvedTeam(TeamId),
}

impl std::fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterializeError::Catalog(e) => write!(f, "Team catalog error: {}", e),
            MaterializeError::UnresolvedTeam(id) => write!(f, "Team `{}` not found", id),
        }
    }
}

impl std::error::Error for MaterializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaterializeError::Catalog(e) => Some(e),
            MaterializeError::UnresolvedTeam(_) => None,
        }
    }
}

impl From<CatalogError> for MaterializeError {
    fn from(e: CatalogError) -> Self {
        MaterializeError::Catalog(e)
    }
}
