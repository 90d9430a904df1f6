//! Integration tests for catalog-backed generation: rating threshold, league filter, catalog errors.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::Path;
use tourney_allocator::{
    AllocationError, CatalogError, InMemoryCatalog, ParticipantRequirement, SortField, Team,
    TeamCatalog, TeamId, TourneyGenerator, DEFAULT_MIN_RATING,
};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/teams.csv"))
        .unwrap()
}

fn leagues(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn participant(id: &str, required: &[&str]) -> ParticipantRequirement {
    ParticipantRequirement::new(id, 0, required.iter().map(|s| s.to_string()).collect())
}

/// Catalog that fails every call.
struct UnavailableCatalog;

impl TeamCatalog for UnavailableCatalog {
    fn search_teams(
        &self,
        _min_rating: f64,
        _leagues: &[String],
        _sort: SortField,
        _limit: usize,
    ) -> Result<Vec<Team>, CatalogError> {
        Err(CatalogError::Lookup("teams service unavailable".to_string()))
    }

    fn teams_by_id(&self, _ids: &[TeamId]) -> Result<Vec<Team>, CatalogError> {
        Err(CatalogError::Lookup("teams service unavailable".to_string()))
    }
}

#[test]
fn default_threshold_excludes_low_rated_teams() {
    let generator = TourneyGenerator::new(catalog());
    assert_eq!(generator.min_rating(), DEFAULT_MIN_RATING);

    // 12 teams in the file, one rated below 3.
    let result = generator.generate(3, 4, &[], &[participant("p1", &[])], &mut StdRng::seed_from_u64(1));
    assert_eq!(
        result,
        Err(AllocationError::InsufficientTeams {
            needed: 12,
            available: 11
        })
    );

    let t = generator
        .generate(1, 11, &[], &[participant("p1", &[])], &mut StdRng::seed_from_u64(1))
        .unwrap();
    assert!(t.slots().all(|s| s.team_id() != "lecce"));
}

#[test]
fn lowered_threshold_admits_every_team() {
    let generator = TourneyGenerator::new(catalog()).with_min_rating(0.0);
    let t = generator
        .generate(3, 4, &[], &[participant("p1", &[]), participant("p2", &[])], &mut StdRng::seed_from_u64(2))
        .unwrap();
    assert_eq!(t.slots().count(), 12);
}

#[test]
fn league_filter_limits_free_picks() {
    let generator = TourneyGenerator::new(catalog());
    let filter = leagues(&["bundesliga", "serie_a"]);
    let t = generator
        .generate(1, 5, &filter, &[participant("p1", &[])], &mut StdRng::seed_from_u64(3))
        .unwrap();

    let used: HashSet<&str> = t.slots().map(|s| s.team_id()).collect();
    assert_eq!(
        used,
        HashSet::from(["bayern", "dortmund", "mainz", "milan", "napoli"])
    );
}

#[test]
fn required_team_outside_league_filter_is_still_placed() {
    let generator = TourneyGenerator::new(catalog());
    let filter = leagues(&["bundesliga"]);
    let participants = [participant("p1", &["liverpool"]), participant("p2", &[])];
    let t = generator
        .generate(2, 2, &filter, &participants, &mut StdRng::seed_from_u64(4))
        .unwrap();

    assert_eq!(t.slots_of("p1").filter(|s| s.team_id() == "liverpool").count(), 1);
    let used: HashSet<&str> = t.slots().map(|s| s.team_id()).collect();
    assert_eq!(
        used,
        HashSet::from(["liverpool", "bayern", "dortmund", "mainz"])
    );
}

#[test]
fn required_team_missing_from_catalog_fails() {
    let generator = TourneyGenerator::new(catalog());
    let result = generator.generate(
        1,
        2,
        &[],
        &[participant("p1", &["ghost"])],
        &mut StdRng::seed_from_u64(5),
    );
    assert_eq!(
        result,
        Err(AllocationError::MissingRequiredTeams(vec!["ghost".to_string()]))
    );
}

#[test]
fn catalog_failure_aborts_generation() {
    let generator = TourneyGenerator::new(UnavailableCatalog);
    let result = generator.generate(1, 2, &[], &[participant("p1", &[])], &mut StdRng::seed_from_u64(6));
    assert!(matches!(
        result,
        Err(AllocationError::Catalog(CatalogError::Lookup(_)))
    ));
}

#[test]
fn invalid_request_is_rejected_before_catalog_call() {
    let generator = TourneyGenerator::new(UnavailableCatalog);
    let result = generator.generate(0, 2, &[], &[participant("p1", &[])], &mut StdRng::seed_from_u64(7));
    assert_eq!(result, Err(AllocationError::ZeroGroups));
}

#[test]
fn generator_works_over_a_borrowed_catalog() {
    let catalog = catalog();
    let generator = TourneyGenerator::new(&catalog);
    let t = generator
        .generate(2, 3, &[], &[participant("p1", &["real"])], &mut StdRng::seed_from_u64(8))
        .unwrap();
    assert_eq!(t.groups().len(), 2);
    assert!(t.slots().any(|s| s.team_id() == "real"));
}
