//! Resolve the team ids of built tournaments into full team records for output.

use crate::catalog::TeamCatalog;
use crate::models::{
    Group, GroupView, MaterializeError, SlotView, Team, TeamId, Tournament, TournamentView,
};
use std::collections::{HashMap, HashSet};

/// Converts tournaments into their response shape using one batched catalog lookup per call.
#[derive(Clone, Debug)]
pub struct Materializer<C> {
    catalog: C,
}

impl<C: TeamCatalog> Materializer<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolve every slot of every tournament.
    ///
    /// Fails with [`MaterializeError::UnresolvedTeam`] if the catalog does not return a
    /// referenced team.
    pub fn materialize(
        &self,
        tournaments: &[Tournament],
    ) -> Result<Vec<TournamentView>, MaterializeError> {
        let ids = distinct_team_ids(tournaments);
        let resolved: HashMap<TeamId, Team> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.catalog
                .teams_by_id(&ids)?
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect()
        };

        tournaments
            .iter()
            .map(|t| tournament_view(t, &resolved))
            .collect()
    }
}

fn distinct_team_ids(tournaments: &[Tournament]) -> Vec<TeamId> {
    let mut seen = HashSet::new();
    tournaments
        .iter()
        .flat_map(Tournament::slots)
        .map(|slot| slot.team_id())
        .filter(|id| seen.insert(*id))
        .map(str::to_owned)
        .collect()
}

fn tournament_view(
    tournament: &Tournament,
    resolved: &HashMap<TeamId, Team>,
) -> Result<TournamentView, MaterializeError> {
    let groups = tournament
        .groups()
        .iter()
        .map(|g| group_view(g, resolved))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TournamentView {
        id: tournament.id(),
        groups_count: tournament.group_count(),
        teams_per_group: tournament.group_size(),
        generated_at: tournament.generated_at(),
        groups,
    })
}

fn group_view(
    group: &Group,
    resolved: &HashMap<TeamId, Team>,
) -> Result<GroupView, MaterializeError> {
    let team_slots = group
        .filled_slots()
        .map(|slot| {
            let team = resolved
                .get(slot.team_id())
                .ok_or_else(|| MaterializeError::UnresolvedTeam(slot.team_id().to_owned()))?;
            Ok(SlotView {
                user_id: slot.participant_id().to_owned(),
                team: team.clone(),
            })
        })
        .collect::<Result<Vec<_>, MaterializeError>>()?;

    Ok(GroupView {
        name: group.name().to_owned(),
        team_slots,
    })
}
