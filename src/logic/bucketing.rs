//! Rating buckets: teams grouped by identical rating, highest rating first.

use crate::models::Team;

/// Split `teams` into buckets of equal rating, ordered by descending rating.
///
/// No team is dropped or duplicated. Order inside a bucket is unspecified.
pub fn group_by_rating(mut teams: Vec<Team>) -> Vec<Vec<Team>> {
    teams.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let mut buckets: Vec<Vec<Team>> = Vec::new();
    for team in teams {
        match buckets.last_mut() {
            Some(bucket) if bucket.first().is_some_and(|t| t.rating == team.rating) => {
                bucket.push(team)
            }
            _ => buckets.push(vec![team]),
        }
    }
    buckets
}
