//! URL building utilities for provider endpoints

use super::models::CompetitionParams;

/// Builds the competition index URL.
///
/// # Example
/// ```
/// use matchsnap::provider::urls::build_competition_index_url;
///
/// let url = build_competition_index_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/competitions");
/// ```
pub fn build_competition_index_url(api_domain: &str) -> String {
    format!("{api_domain}/competitions")
}

/// Builds the competition detail URL from an index parameter bag.
/// Scalar bag entries become query parameters.
///
/// # Example
/// ```
/// use matchsnap::provider::models::CompetitionParams;
/// use matchsnap::provider::urls::build_competition_detail_url;
///
/// let params: CompetitionParams = serde_json::from_str(r#"{"id": "C1"}"#).unwrap();
/// let url = build_competition_detail_url("https://api.example.com", &params);
/// assert_eq!(url, "https://api.example.com/competition?id=C1");
/// ```
pub fn build_competition_detail_url(api_domain: &str, params: &CompetitionParams) -> String {
    let query = params
        .query_pairs()
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{api_domain}/competition?{query}")
}

/// Builds the per-date match list URL.
///
/// # Example
/// ```
/// use matchsnap::provider::urls::build_matches_url;
///
/// let url = build_matches_url("https://api.example.com", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/matches?date=2024-01-15");
/// ```
pub fn build_matches_url(api_domain: &str, date: &str) -> String {
    format!("{api_domain}/matches?date={date}")
}
