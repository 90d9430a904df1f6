//! Team catalog boundary: searching the team pool and resolving teams by id.

mod memory;

pub use memory::InMemoryCatalog;

use crate::models::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `limit` value meaning "return every match".
pub const NO_LIMIT: usize = 0;

/// Order of search results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Highest rating first.
    #[default]
    Rating,
    /// Alphabetical by team name.
    Name,
}

/// Errors returned by a team catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogError {
    /// The catalog could not be queried or read.
    Lookup(String),
    /// The catalog returned a record that is not a well-formed team.
    TeamShape(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Lookup(msg) => write!(f, "lookup failed: {}", msg),
            CatalogError::TeamShape(msg) => write!(f, "malformed team record: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Source of team records.
pub trait TeamCatalog {
    /// Teams rated at least `min_rating`, restricted to `leagues` unless it is empty.
    /// `limit == NO_LIMIT` returns every match.
    fn search_teams(
        &self,
        min_rating: f64,
        leagues: &[String],
        sort: SortField,
        limit: usize,
    ) -> Result<Vec<Team>, CatalogError>;

    /// Teams with the given ids. Unknown ids are absent from the result; order is unspecified.
    fn teams_by_id(&self, ids: &[TeamId]) -> Result<Vec<Team>, CatalogError>;
}

impl<T: TeamCatalog + ?Sized> TeamCatalog for &T {
    fn search_teams(
        &self,
        min_rating: f64,
        leagues: &[String],
        sort: SortField,
        limit: usize,
    ) -> Result<Vec<Team>, CatalogError> {
        (**self).search_teams(min_rating, leagues, sort, limit)
    }

    fn teams_by_id(&self, ids: &[TeamId]) -> Result<Vec<Team>, CatalogError> {
        (**self).teams_by_id(ids)
    }
}

impl<T: TeamCatalog + ?Sized> TeamCatalog for Arc<T> {
    fn search_teams(
        &self,
        min_rating: f64,
        leagues: &[String],
        sort: SortField,
        limit: usize,
    ) -> Result<Vec<Team>, CatalogError> {
        (**self).search_teams(min_rating, leagues, sort, limit)
    }

    fn teams_by_id(&self, ids: &[TeamId]) -> Result<Vec<Team>, CatalogError> {
        (**self).teams_by_id(ids)
    }
}

/// Reject records that cannot take part in allocation.
pub(crate) fn check_shape(team: &Team) -> Result<(), CatalogError> {
    if team.id.trim().is_empty() {
        return Err(CatalogError::TeamShape(format!(
            "team `{}` has an empty id",
            team.name
        )));
    }
    if !team.rating.is_finite() {
        return Err(CatalogError::TeamShape(format!(
            "team `{}` has non-finite rating {}",
            team.id, team.rating
        )));
    }
    Ok(())
}
