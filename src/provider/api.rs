//! The three logical provider retrievals: competition index, competition
//! detail and per-date match list.
//!
//! Each operation issues exactly one request and propagates failures to the
//! caller. The pipeline aborts the whole run on the first error since later
//! joins assume a complete competition index.

use reqwest::Client;
use tracing::{error, info, instrument};

use super::fetch::fetch;
use super::models::{
    CompetitionDetail, CompetitionIndexResponse, CompetitionParams, MatchDayResponse, RawMatch,
};
use super::urls::{build_competition_detail_url, build_competition_index_url, build_matches_url};
use crate::config::Config;
use crate::error::AppError;

/// Fetches the full competition index: the ordered list of parameter bags
/// needed to retrieve each competition's detail.
#[instrument(skip(client, config))]
pub async fn fetch_competition_index(
    client: &Client,
    config: &Config,
) -> Result<Vec<CompetitionParams>, AppError> {
    let url = build_competition_index_url(&config.api_domain);
    info!("Fetching competition index");

    let index: CompetitionIndexResponse = fetch(client, &url).await.inspect_err(|e| {
        error!("Failed to fetch competition index: {e}");
    })?;

    info!("Competition index lists {} competitions", index.competitions.len());
    Ok(index.competitions)
}

/// Fetches one competition's detail (identity, metadata, team list) using
/// the parameter bag from the index.
#[instrument(skip(client, config, params), fields(competition_id = params.id().unwrap_or("?")))]
pub async fn fetch_competition_detail(
    client: &Client,
    config: &Config,
    params: &CompetitionParams,
) -> Result<CompetitionDetail, AppError> {
    let url = build_competition_detail_url(&config.api_domain, params);
    info!(
        "Fetching competition detail for {}",
        params.id().unwrap_or("?")
    );

    let detail: CompetitionDetail = fetch(client, &url).await.inspect_err(|e| {
        error!(
            "Failed to fetch competition detail for {}: {e}",
            params.id().unwrap_or("?")
        );
    })?;

    info!(
        "Fetched competition {} ({}) with {} teams",
        detail.id,
        detail.name,
        detail.teams.len()
    );
    Ok(detail)
}

/// Fetches the ordered raw match list for one calendar date.
#[instrument(skip(client, config))]
pub async fn fetch_match_day(
    client: &Client,
    config: &Config,
    date: &str,
) -> Result<Vec<RawMatch>, AppError> {
    let url = build_matches_url(&config.api_domain, date);
    info!("Fetching matches for {date}");

    let day: MatchDayResponse = fetch(client, &url).await.inspect_err(|e| {
        error!("Failed to fetch matches for {date}: {e}");
    })?;

    info!("Fetched {} matches for {date}", day.matches.len());
    Ok(day.matches)
}
