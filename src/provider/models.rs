//! Wire models for the stats provider's three retrieval endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response shape of the competition index endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionIndexResponse {
    pub competitions: Vec<CompetitionParams>,
}

/// Opaque parameter bag identifying one competition for the detail fetch.
///
/// The index endpoint decides which keys each competition needs; the bag is
/// forwarded verbatim as query parameters, so new provider-side keys pass
/// through without a code change here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionParams(pub serde_json::Map<String, Value>);

impl CompetitionParams {
    /// Provider-assigned competition id, if the bag carries one.
    /// Used only for diagnostics; the fetch forwards the whole bag.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Flattens scalar entries into query pairs in the map's key order,
    /// which is deterministic for a given bag. Nested values are skipped;
    /// the provider only uses scalar parameters.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                };
                rendered.map(|v| (key.clone(), v))
            })
            .collect()
    }
}

/// Full competition detail: identity, metadata and the team list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionDetail {
    pub id: String,
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub teams: Vec<TeamPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPayload {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub shooting: ShootingStats,
    pub played: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShootingStats {
    pub shots: u32,
    pub xg: f64,
}

/// Response shape of the per-date match list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDayResponse {
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

/// A raw match as returned by the provider for a given date. Competition and
/// team references carry only ids (plus the competition's display name); full
/// records come from the enrichment lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    pub name: String,
    pub utc_time: String,
    pub finished: bool,
    /// Score string in `"<int> - <int>"` form; absent for unplayed matches.
    #[serde(default)]
    pub score: Option<String>,
    pub competition: RawCompetitionRef,
    pub home: RawTeamRef,
    pub away: RawTeamRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCompetitionRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeamRef {
    pub id: String,
}
