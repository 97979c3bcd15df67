//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default pacing delay between consecutive provider requests in seconds.
/// The upstream providers require serialized, rate-limited access.
pub const DEFAULT_REQUEST_DELAY_SECONDS: u64 = 2;

/// Default destination file for the exported match document
pub const DEFAULT_OUTPUT_FILE: &str = "matches.json";

/// Date window offsets relative to the anchor day, inclusive.
/// Yesterday through the day after tomorrow.
pub const WINDOW_START_OFFSET_DAYS: i64 = -1;
pub const WINDOW_END_OFFSET_DAYS: i64 = 2;

/// Separator between home and away scores in the provider's score string
pub const SCORE_SEPARATOR: &str = " - ";
