//! Tournament generation: fetch the team pool from the catalog, then allocate.

use crate::catalog::{SortField, TeamCatalog, NO_LIMIT};
use crate::logic::allocation::{allocate_teams, validate_request};
use crate::models::{AllocationError, ParticipantRequirement, TeamId, Tournament};
use rand::Rng;
use std::collections::HashSet;

/// Minimum rating a team needs to enter the free-pick pool.
pub const DEFAULT_MIN_RATING: f64 = 3.0;

/// Generates tournaments from a team catalog.
#[derive(Clone, Debug)]
pub struct TourneyGenerator<C> {
    catalog: C,
    min_rating: f64,
}

impl<C: TeamCatalog> TourneyGenerator<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            min_rating: DEFAULT_MIN_RATING,
        }
    }

    /// Override the rating threshold of the free-pick pool.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Build one tournament of `group_count` groups with `group_size` slots each.
    ///
    /// Searches the catalog for teams rated at least `min_rating` in `leagues` (all leagues
    /// when empty), fetches every required team in one batch, and hands both to
    /// [`allocate_teams`]. Any catalog failure aborts the whole generation.
    pub fn generate<R: Rng>(
        &self,
        group_count: usize,
        group_size: usize,
        leagues: &[String],
        requirements: &[ParticipantRequirement],
        rng: &mut R,
    ) -> Result<Tournament, AllocationError> {
        validate_request(group_count, group_size, requirements)?;

        let pool = self
            .catalog
            .search_teams(self.min_rating, leagues, SortField::Rating, NO_LIMIT)?;

        let required_ids = required_team_ids(requirements);
        let required = if required_ids.is_empty() {
            Vec::new()
        } else {
            self.catalog.teams_by_id(&required_ids)?
        };
        log::debug!(
            "catalog returned {} candidate teams and {} of {} required teams",
            pool.len(),
            required.len(),
            required_ids.len()
        );

        allocate_teams(group_count, group_size, pool, required, requirements, rng)
    }
}

/// Every required team id across all participants, first occurrence order.
fn required_team_ids(requirements: &[ParticipantRequirement]) -> Vec<TeamId> {
    let mut seen = HashSet::new();
    requirements
        .iter()
        .flat_map(|r| r.required_team_ids.iter())
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}
