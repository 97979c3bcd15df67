//! Match aggregation: per-date raw match retrieval and the cross-reference
//! join against the enrichment lookups.

use reqwest::Client;
use tracing::{info, instrument};

use super::pacer::Pacer;
use super::records::{CompetitionRecord, Lookups, MatchRecord, MatchWindow};
use crate::config::Config;
use crate::constants::SCORE_SEPARATOR;
use crate::error::AppError;
use crate::progress::ProgressSink;
use crate::provider::fetch_match_day;

/// Parses a provider score string of the form `"<int> - <int>"` into
/// (home, away). The separator must appear literally with surrounding
/// spaces; anything else signals an upstream contract change and is
/// surfaced rather than swallowed.
pub fn parse_score(raw: &str) -> Result<(i32, i32), AppError> {
    let (home, away) = raw
        .split_once(SCORE_SEPARATOR)
        .ok_or_else(|| AppError::score_parse_error(raw))?;

    let home = home
        .parse::<i32>()
        .map_err(|_| AppError::score_parse_error(raw))?;
    let away = away
        .parse::<i32>()
        .map_err(|_| AppError::score_parse_error(raw))?;

    Ok((home, away))
}

/// Fetches each window date's raw matches sequentially (same pacing
/// discipline as enrichment) and joins them against the lookup tables.
///
/// Per match: the competition view keeps the raw match's own competition
/// name but the stored logo; home and away team records get their `score`
/// overwritten in place, which is the only place team scores are populated.
/// Dates with no matches keep their key with an empty list. Any fetch or
/// join failure aborts the run; a silently missing date would corrupt
/// downstream consumers expecting all four dates.
#[instrument(skip_all, fields(dates = dates.len()))]
pub async fn aggregate_matches<S: ProgressSink>(
    client: &Client,
    config: &Config,
    dates: &[String],
    lookups: &mut Lookups,
    pacer: &mut Pacer,
    progress: &mut S,
) -> Result<MatchWindow, AppError> {
    let mut window = MatchWindow::default();

    for date in dates {
        pacer.pace().await;
        let raw_matches = fetch_match_day(client, config, date).await?;

        let mut day = Vec::with_capacity(raw_matches.len());
        for raw in raw_matches {
            let stored = lookups
                .competitions
                .get(&raw.competition.id)
                .ok_or_else(|| AppError::unknown_competition(&raw.competition.id, date))?;
            let competition = CompetitionRecord {
                name: raw.competition.name,
                logo: stored.logo.clone(),
            };

            let (home_score, away_score) = match raw.score.as_deref() {
                Some(score) => {
                    let (home, away) = parse_score(score)?;
                    (Some(home), Some(away))
                }
                None => (None, None),
            };

            // In-place writes to the shared records: a team appearing in a
            // later match of the window overwrites its earlier score
            let home = lookups
                .teams
                .get_mut(&raw.home.id)
                .ok_or_else(|| AppError::unknown_team(&raw.home.id, date))?;
            home.score = home_score;

            let away = lookups
                .teams
                .get_mut(&raw.away.id)
                .ok_or_else(|| AppError::unknown_team(&raw.away.id, date))?;
            away.score = away_score;

            day.push(MatchRecord {
                name: raw.name,
                utc_time: raw.utc_time,
                finished: raw.finished,
                competition,
                home_id: raw.home.id,
                away_id: raw.away.id,
            });
        }

        info!("Aggregated {} matches for {date}", day.len());
        window.days.insert(date.clone(), day);
        progress.advance(1);
    }

    Ok(window)
}
