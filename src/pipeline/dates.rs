//! Date window generation

use chrono::{Duration, Local, NaiveDate};

use crate::constants::{WINDOW_END_OFFSET_DAYS, WINDOW_START_OFFSET_DAYS};
use crate::error::AppError;

/// Returns the export window for an anchor date: yesterday, the anchor,
/// tomorrow and the day after tomorrow, each formatted `YYYY-MM-DD`.
/// Pure function of the anchor; deterministic and side-effect free.
pub fn date_window(anchor: NaiveDate) -> Vec<String> {
    (WINDOW_START_OFFSET_DAYS..=WINDOW_END_OFFSET_DAYS)
        .map(|offset| {
            (anchor + Duration::days(offset))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect()
}

/// Resolves the window anchor: an explicit `YYYY-MM-DD` override if given,
/// otherwise the current local date.
pub fn resolve_anchor(custom_date: Option<&str>) -> Result<NaiveDate, AppError> {
    match custom_date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid anchor date '{raw}': {e}"))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
