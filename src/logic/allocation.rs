//! Team allocation: required teams first, free picks by rating, placed round-robin across groups.

use crate::logic::bucketing::group_by_rating;
use crate::models::{
    AllocationError, Group, ParticipantRequirement, Slot, Team, TeamId, Tournament,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Groups are named with single letters a..z.
pub const MAX_GROUPS: usize = 26;

/// Allocate teams into `group_count` groups of `group_size` slots.
///
/// 1. Drop required teams from the candidate pool and bucket the rest by rating.
/// 2. Pass A: serve participants round-robin. Each step takes a random remaining
///    required team of that participant, otherwise a random team from the highest
///    non-empty rating bucket.
/// 3. Pass B: walk the (shuffled) groups and fill each slot for the next participant
///    round-robin, drawing a random one of their remaining picks. The participant
///    cursor is not reset between groups.
/// 4. Shuffle slots within each group and sort groups by name.
///
/// Every required team ends up in its participant's slots and no team is used twice.
pub fn allocate_teams<R: Rng>(
    group_count: usize,
    group_size: usize,
    candidate_pool: Vec<Team>,
    required_teams: Vec<Team>,
    requirements: &[ParticipantRequirement],
    rng: &mut R,
) -> Result<Tournament, AllocationError> {
    validate_request(group_count, group_size, requirements)?;
    let slot_count = group_count.saturating_mul(group_size);

    let required = required_by_participant(requirements, required_teams)?;
    for (index, (requirement, teams)) in requirements.iter().zip(&required).enumerate() {
        let share = round_robin_share(slot_count, requirements.len(), index);
        if teams.len() > share {
            return Err(AllocationError::TooManyRequiredTeams {
                participant: requirement.participant_id.clone(),
                required: teams.len(),
                share,
            });
        }
    }

    let mut taken: HashSet<TeamId> = required.iter().flatten().map(|t| t.id.clone()).collect();
    let required_count = taken.len();
    let free_pool: Vec<Team> = candidate_pool
        .into_iter()
        .filter(|t| taken.insert(t.id.clone()))
        .collect();

    let available = free_pool.len() + required_count;
    if available < slot_count {
        return Err(AllocationError::InsufficientTeams {
            needed: slot_count,
            available,
        });
    }

    let buckets = group_by_rating(free_pool);
    log::debug!(
        "allocating {} slots for {} participants: {} required teams, {} free teams in {} rating buckets",
        slot_count,
        requirements.len(),
        required_count,
        available - required_count,
        buckets.len()
    );

    let mut context = AllocationContext::new(required, buckets);
    let picks = context.emit_picks(slot_count, rng)?;

    let mut groups = shuffled_groups(group_count, group_size, rng);
    place_slots(&mut groups, picks, requirements, rng)?;
    normalize_groups(&mut groups, rng);

    Ok(Tournament::new(group_count, group_size, groups))
}

/// Shape checks that need no catalog data.
pub(crate) fn validate_request(
    group_count: usize,
    group_size: usize,
    requirements: &[ParticipantRequirement],
) -> Result<(), AllocationError> {
    if group_count == 0 {
        return Err(AllocationError::ZeroGroups);
    }
    if group_count > MAX_GROUPS {
        return Err(AllocationError::TooManyGroups {
            max: MAX_GROUPS,
            requested: group_count,
        });
    }
    if group_size == 0 {
        return Err(AllocationError::ZeroGroupSize);
    }
    if requirements.is_empty() {
        return Err(AllocationError::NoParticipants);
    }
    let mut seen = HashSet::with_capacity(requirements.len());
    for requirement in requirements {
        if !seen.insert(requirement.participant_id.as_str()) {
            return Err(AllocationError::DuplicateParticipant(
                requirement.participant_id.clone(),
            ));
        }
    }
    Ok(())
}

/// Slots participant `index` receives when `slot_count` slots are dealt round-robin
/// over `participants`, starting from index 0.
pub fn round_robin_share(slot_count: usize, participants: usize, index: usize) -> usize {
    if participants == 0 {
        return 0;
    }
    slot_count / participants + usize::from(index < slot_count % participants)
}

/// Required teams per participant, in participant order.
fn required_by_participant(
    requirements: &[ParticipantRequirement],
    required_teams: Vec<Team>,
) -> Result<Vec<Vec<Team>>, AllocationError> {
    let mut fetched: HashMap<TeamId, Team> = required_teams
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();
    let mut owners: HashMap<&str, &str> = HashMap::new();
    let mut missing = Vec::new();
    let mut grouped = Vec::with_capacity(requirements.len());

    for requirement in requirements {
        let participant = requirement.participant_id.as_str();
        let mut teams = Vec::new();
        for id in &requirement.required_team_ids {
            match owners.insert(id.as_str(), participant) {
                Some(owner) if owner == participant => continue,
                Some(_) => return Err(AllocationError::DuplicateRequiredTeam(id.clone())),
                None => {}
            }
            match fetched.remove(id) {
                Some(team) => teams.push(team),
                None => missing.push(id.clone()),
            }
        }
        grouped.push(teams);
    }

    if !missing.is_empty() {
        return Err(AllocationError::MissingRequiredTeams(missing));
    }
    Ok(grouped)
}

/// State carried through Pass A.
struct AllocationContext {
    /// Remaining required teams, by participant index.
    required: Vec<Vec<Team>>,
    /// Remaining free teams, highest rating first.
    buckets: Vec<Vec<Team>>,
    /// Next participant to serve.
    cursor: usize,
}

impl AllocationContext {
    fn new(required: Vec<Vec<Team>>, buckets: Vec<Vec<Team>>) -> Self {
        Self {
            required,
            buckets,
            cursor: 0,
        }
    }

    fn next_participant(&mut self) -> usize {
        let participant = self.cursor;
        self.cursor = (self.cursor + 1) % self.required.len();
        participant
    }

    fn emit_team<R: Rng>(&mut self, participant: usize, rng: &mut R) -> Option<Team> {
        if let Some(team) = take_random(&mut self.required[participant], rng) {
            return Some(team);
        }
        let bucket = self.buckets.iter_mut().find(|b| !b.is_empty())?;
        take_random(bucket, rng)
    }

    /// Pass A: `count` picks dealt round-robin, returned per participant index.
    fn emit_picks<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<TeamId>>, AllocationError> {
        let mut picks = vec![Vec::new(); self.required.len()];
        for emitted in 0..count {
            let participant = self.next_participant();
            let team = self
                .emit_team(participant, rng)
                .ok_or(AllocationError::InsufficientTeams {
                    needed: count,
                    available: emitted,
                })?;
            picks[participant].push(team.id);
        }
        Ok(picks)
    }
}

/// Remove and return a uniformly random element.
fn take_random<T, R: Rng>(items: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..items.len());
    Some(items.swap_remove(index))
}

fn group_name(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}

fn shuffled_groups<R: Rng>(count: usize, size: usize, rng: &mut R) -> Vec<Group> {
    let mut groups: Vec<Group> = (0..count)
        .map(|i| Group::empty(group_name(i), size))
        .collect();
    groups.shuffle(rng);
    groups
}

/// Pass B: fill every group slot by slot from the participants' picks.
fn place_slots<R: Rng>(
    groups: &mut [Group],
    mut picks: Vec<Vec<TeamId>>,
    requirements: &[ParticipantRequirement],
    rng: &mut R,
) -> Result<(), AllocationError> {
    let needed: usize = groups.iter().map(Group::size).sum();
    let mut cursor = 0;
    let mut placed = 0;

    for group in groups.iter_mut() {
        for index in 0..group.size() {
            let participant = cursor;
            cursor = (cursor + 1) % requirements.len();
            let team_id = take_random(&mut picks[participant], rng).ok_or(
                AllocationError::InsufficientTeams {
                    needed,
                    available: placed,
                },
            )?;
            group.assign_slot(
                index,
                Slot::new(requirements[participant].participant_id.clone(), team_id),
            );
            placed += 1;
        }
    }
    Ok(())
}

fn normalize_groups<R: Rng>(groups: &mut [Group], rng: &mut R) {
    for group in groups.iter_mut() {
        group.shuffle_slots(rng);
    }
    groups.sort_by(|a, b| a.name().cmp(b.name()));
}
