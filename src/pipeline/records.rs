//! Owned record tables and the keyed match window.
//!
//! Competition and team records live in arenas keyed by provider-assigned
//! id. Matches hold id keys rather than value copies, so every match that
//! references a team observes the *final* state of that shared record. If a
//! team plays several fetched matches inside the window, the last processed
//! match's score is the one the export shows for all of them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::AppError;

/// Descriptive record for one competition. Created once during enrichment
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub name: String,
    pub logo: String,
}

/// Descriptive record for one team. `score` starts absent and is overwritten
/// in place each time the team appears in a fetched match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub logo: String,
    pub shots: u32,
    pub xg: f64,
    pub score: Option<i32>,
    pub played: u32,
}

/// Lookup tables built by the enrichment stage. Mutated only during
/// enrichment (inserts) and aggregation (score writes); read-only at export.
#[derive(Debug, Default)]
pub struct Lookups {
    pub competitions: HashMap<String, CompetitionRecord>,
    pub teams: HashMap<String, TeamRecord>,
}

/// One aggregated match. The competition view is a per-match value (the raw
/// match's own competition name joined with the stored logo); home and away
/// are keys into the shared team table.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub name: String,
    pub utc_time: String,
    pub finished: bool,
    pub competition: CompetitionRecord,
    pub home_id: String,
    pub away_id: String,
}

/// Date-keyed match window. `BTreeMap` keeps the `YYYY-MM-DD` keys in
/// chronological order, which is also the window's generation order.
/// Every generated date is present even when it has no matches.
#[derive(Debug, Default)]
pub struct MatchWindow {
    pub days: BTreeMap<String, Vec<MatchRecord>>,
}

/// Fully denormalized match shape as written to the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExport {
    pub name: String,
    pub utc_time: String,
    pub finished: bool,
    pub competition: CompetitionRecord,
    pub home: TeamRecord,
    pub away: TeamRecord,
}

/// The export document: date string to denormalized match list.
pub type ExportDocument = BTreeMap<String, Vec<MatchExport>>;

impl MatchWindow {
    /// Resolves every match's team keys against the final team table,
    /// producing the self-contained export document. Team snapshots are
    /// taken here, after all score mutations, so aliased teams show their
    /// last written score in every match that references them.
    pub fn resolve(&self, lookups: &Lookups) -> Result<ExportDocument, AppError> {
        let mut document = ExportDocument::new();

        for (date, matches) in &self.days {
            let mut day = Vec::with_capacity(matches.len());
            for record in matches {
                let home = lookups
                    .teams
                    .get(&record.home_id)
                    .ok_or_else(|| AppError::unknown_team(&record.home_id, date))?;
                let away = lookups
                    .teams
                    .get(&record.away_id)
                    .ok_or_else(|| AppError::unknown_team(&record.away_id, date))?;

                day.push(MatchExport {
                    name: record.name.clone(),
                    utc_time: record.utc_time.clone(),
                    finished: record.finished,
                    competition: record.competition.clone(),
                    home: home.clone(),
                    away: away.clone(),
                });
            }
            document.insert(date.clone(), day);
        }

        Ok(document)
    }
}
