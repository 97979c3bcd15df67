//! Competition and team enrichment: turns the index's parameter bags into
//! the competition and team lookup tables.

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::pacer::Pacer;
use super::records::{CompetitionRecord, Lookups, TeamRecord};
use crate::config::Config;
use crate::error::AppError;
use crate::progress::ProgressSink;
use crate::provider::fetch_competition_detail;
use crate::provider::models::CompetitionParams;

/// Fetches each competition's detail strictly sequentially, in index order,
/// and builds the id-keyed competition and team tables. Team `score` starts
/// absent; the aggregation stage fills it in. A failed fetch aborts the run.
///
/// Duplicate team ids across competitions are resolved last-write-wins: the
/// later-processed competition's team data replaces the earlier one.
#[instrument(skip_all, fields(competitions = params_list.len()))]
pub async fn enrich_competitions<S: ProgressSink>(
    client: &Client,
    config: &Config,
    params_list: &[CompetitionParams],
    pacer: &mut Pacer,
    progress: &mut S,
) -> Result<Lookups, AppError> {
    let mut lookups = Lookups::default();

    for params in params_list {
        pacer.pace().await;
        let detail = fetch_competition_detail(client, config, params).await?;

        lookups.competitions.insert(
            detail.id.clone(),
            CompetitionRecord {
                name: detail.name,
                logo: detail.logo,
            },
        );

        for team in detail.teams {
            if lookups.teams.contains_key(&team.id) {
                warn!(
                    "Team {} already seen in an earlier competition; overwriting",
                    team.id
                );
            }
            lookups.teams.insert(
                team.id,
                TeamRecord {
                    name: team.name,
                    logo: team.logo,
                    shots: team.shooting.shots,
                    xg: team.shooting.xg,
                    score: None,
                    played: team.played,
                },
            );
        }

        progress.advance(1);
    }

    info!(
        "Enrichment complete: {} competitions, {} teams",
        lookups.competitions.len(),
        lookups.teams.len()
    );
    Ok(lookups)
}
