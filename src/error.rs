use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("{name} is not set (set it in the environment or .env)")]
    MissingCredential { name: &'static str },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Upstream data-provider errors.
///
/// These never escape the indicator source set; they are logged and the
/// affected indicator is reported as unavailable.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{provider}: credential not configured")]
    MissingCredential { provider: &'static str },

    #[error("{provider}: empty result")]
    EmptyResult { provider: &'static str },

    #[error("{provider}: unexpected status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider}: malformed payload: {reason}")]
    Malformed {
        provider: &'static str,
        reason: String,
    },
}

/// Notification delivery errors.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("message rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("startup notification failed: {0}")]
    StartupNotification(#[source] Box<Error>),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
