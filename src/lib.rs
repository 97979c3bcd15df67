//! Football Match Snapshot Exporter Library
//!
//! This library aggregates competition, team and match data from a remote
//! stats provider into a single denormalized JSON export covering a fixed
//! four-day window (yesterday through the day after tomorrow).
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use matchsnap::config::Config;
//! use matchsnap::error::AppError;
//! use matchsnap::pipeline::{run_pipeline, write_export};
//! use matchsnap::progress::NoProgress;
//! use matchsnap::provider::create_http_client;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client(&config)?;
//!
//!     let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!     let mut progress = NoProgress;
//!     let document = run_pipeline(&client, &config, anchor, &mut progress).await?;
//!
//!     write_export(&document, Path::new("matches.json")).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod provider;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use pipeline::{ExportDocument, run_pipeline, write_export};
pub use progress::{ConsoleProgress, NoProgress, ProgressSink};
pub use provider::create_http_client;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
