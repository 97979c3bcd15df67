//! The fetch-join-enrich pipeline: competitions, then per-competition
//! teams, then per-date matches, joined into one denormalized document.
//!
//! All provider requests are issued strictly sequentially with a pacing
//! delay between them; every stage's output is a precondition for the next,
//! so the first failure aborts the whole run.

pub mod aggregate;
pub mod dates;
pub mod enrich;
pub mod export;
pub mod pacer;
pub mod records;

pub use aggregate::{aggregate_matches, parse_score};
pub use dates::{date_window, resolve_anchor};
pub use enrich::enrich_competitions;
pub use export::{render_export, write_export};
pub use records::{
    CompetitionRecord, ExportDocument, Lookups, MatchExport, MatchRecord, MatchWindow, TeamRecord,
};

use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::AppError;
use crate::progress::ProgressSink;
use crate::provider::fetch_competition_index;
use pacer::Pacer;

/// Runs the full pipeline for the window anchored at `anchor` and returns
/// the resolved export document. Reports one progress unit per fetch:
/// one for the index, one per competition and one per window date.
///
/// The document is returned rather than written so callers stay in charge
/// of the destination; on error nothing has touched the filesystem.
#[instrument(skip(client, config, progress))]
pub async fn run_pipeline<S: ProgressSink>(
    client: &Client,
    config: &Config,
    anchor: NaiveDate,
    progress: &mut S,
) -> Result<ExportDocument, AppError> {
    let dates = date_window(anchor);
    info!("Export window: {} through {}", dates[0], dates[3]);

    let mut pacer = Pacer::new(Duration::from_secs(config.request_delay_seconds));

    progress.add_work(1);
    pacer.pace().await;
    let params_list = fetch_competition_index(client, config).await?;
    progress.advance(1);

    progress.add_work(params_list.len() as u64 + dates.len() as u64);

    let mut lookups =
        enrich_competitions(client, config, &params_list, &mut pacer, progress).await?;

    let window = aggregate_matches(
        client,
        config,
        &dates,
        &mut lookups,
        &mut pacer,
        progress,
    )
    .await?;

    window.resolve(&lookups)
}
