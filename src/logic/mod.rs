//! Tournament generation logic: rating buckets, allocation, catalog-backed generation, output.

mod allocation;
mod bucketing;
mod generator;
mod materialize;

pub use allocation::{allocate_teams, round_robin_share, MAX_GROUPS};
pub use bucketing::group_by_rating;
pub use generator::{TourneyGenerator, DEFAULT_MIN_RATING};
pub use materialize::Materializer;
