//! Access to the upstream stats provider: HTTP client construction, URL
//! building and the three retrieval operations the pipeline consumes.

pub mod api;
mod fetch;
pub mod http_client;
pub mod models;
pub mod urls;

pub use api::{fetch_competition_detail, fetch_competition_index, fetch_match_day};
pub use http_client::create_http_client;
pub use models::{CompetitionDetail, CompetitionParams, RawMatch};
