use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from provider: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("Provider endpoint not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Provider server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Provider client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("Provider returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("Provider returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Provider returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Join errors: a match references an id the enrichment pass never saw
    #[error("Unknown competition id {id} referenced by a match on {date}")]
    UnknownCompetition { id: String, date: String },

    #[error("Unknown team id {id} referenced by a match on {date}")]
    UnknownTeam { id: String, date: String },

    #[error("Malformed score string: {raw:?} (expected \"<int> - <int>\")")]
    ScoreParse { raw: String },

    #[error("Failed to write export to {path}: {source}")]
    ExportWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unknown competition reference error
    pub fn unknown_competition(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self::UnknownCompetition {
            id: id.into(),
            date: date.into(),
        }
    }

    /// Create an unknown team reference error
    pub fn unknown_team(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self::UnknownTeam {
            id: id.into(),
            date: date.into(),
        }
    }

    /// Create a score parse error carrying the offending raw string
    pub fn score_parse_error(raw: impl Into<String>) -> Self {
        Self::ScoreParse { raw: raw.into() }
    }

    /// Create an export write error for a destination path
    pub fn export_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ExportWrite {
            path: path.into(),
            source,
        }
    }

    /// Check if error indicates data not found rather than a transport failure
    #[allow(dead_code)] // Utility method for future error handling patterns
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. }
                | AppError::ApiNoData { .. }
                | AppError::UnknownCompetition { .. }
                | AppError::UnknownTeam { .. }
        )
    }
}
