//! File-backed catalog held in memory.

use super::{check_shape, CatalogError, SortField, TeamCatalog, NO_LIMIT};
use crate::models::{Team, TeamId};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Catalog over a fixed list of teams, loaded once at start-up.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    teams: Vec<Team>,
    by_id: HashMap<TeamId, usize>,
}

impl InMemoryCatalog {
    /// Build from team records. Every record must have a non-empty, unique id and a finite rating.
    pub fn new(teams: Vec<Team>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(teams.len());
        for (index, team) in teams.iter().enumerate() {
            check_shape(team)?;
            if by_id.insert(team.id.clone(), index).is_some() {
                return Err(CatalogError::TeamShape(format!(
                    "team id `{}` appears more than once",
                    team.id
                )));
            }
        }
        Ok(Self { teams, by_id })
    }

    /// Load CSV with header `id,name,league,rating`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut teams = Vec::new();
        for record in rdr.deserialize::<Team>() {
            teams.push(record.map_err(csv_error)?);
        }
        Self::new(teams)
    }

    /// Load a JSON array of team objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let teams: Vec<Team> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CatalogError::Lookup(e.to_string())
            } else {
                CatalogError::TeamShape(e.to_string())
            }
        })?;
        Self::new(teams)
    }

    /// Load from a `.csv` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| CatalogError::Lookup(format!("{}: {}", path.display(), e)))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::from_csv_reader(file),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_reader(file),
            _ => Err(CatalogError::Lookup(format!(
                "{}: expected a .csv or .json file",
                path.display()
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

fn csv_error(e: csv::Error) -> CatalogError {
    if e.is_io_error() {
        return CatalogError::Lookup(e.to_string());
    }
    match e.position() {
        Some(pos) => CatalogError::TeamShape(format!("line {}: {}", pos.line(), e)),
        None => CatalogError::TeamShape(e.to_string()),
    }
}

impl TeamCatalog for InMemoryCatalog {
    fn search_teams(
        &self,
        min_rating: f64,
        leagues: &[String],
        sort: SortField,
        limit: usize,
    ) -> Result<Vec<Team>, CatalogError> {
        let mut found: Vec<Team> = self
            .teams
            .iter()
            .filter(|t| t.rating >= min_rating)
            .filter(|t| leagues.is_empty() || leagues.iter().any(|l| *l == t.league))
            .cloned()
            .collect();
        match sort {
            SortField::Rating => found.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortField::Name => found.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        if limit != NO_LIMIT {
            found.truncate(limit);
        }
        Ok(found)
    }

    fn teams_by_id(&self, ids: &[TeamId]) -> Result<Vec<Team>, CatalogError> {
        let mut seen = HashSet::with_capacity(ids.len());
        Ok(ids
            .iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.by_id.get(id))
            .map(|&index| self.teams[index].clone())
            .collect())
    }
}
