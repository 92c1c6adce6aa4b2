use thiserror::Error;

use crate::adapter::outbound::http::ExpectedStatus;
use crate::port::outbound::stream::ConnectionState;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from a single typed REST call.
///
/// Every variant carries the method and URL so a failure can be diagnosed
/// from the log line alone.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("creating {method} request for {url}: {reason}")]
    RequestConstruction {
        method: reqwest::Method,
        url: String,
        reason: String,
    },

    #[error("encoding {method} request body for {url}: {source}")]
    Encode {
        method: reqwest::Method,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("making {method} request to {url}: {source}")]
    Transport {
        method: reqwest::Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("expected {expected}, got {actual} from {method} {url}: {body}")]
    UnexpectedStatus {
        method: reqwest::Method,
        url: String,
        expected: ExpectedStatus,
        actual: u16,
        body: String,
    },

    #[error("parsing {method} response from {url}: {source}")]
    Decode {
        method: reqwest::Method,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{method} {url} returned no content")]
    MissingContent { method: reqwest::Method, url: String },
}

impl FetchError {
    /// HTTP status of the response, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// Failure to resolve one event slug. Never fatal to the pipeline.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("fetching event {slug}: {source}")]
    Fetch {
        slug: String,
        #[source]
        source: FetchError,
    },

    #[error("event {slug} not found")]
    NotFound { slug: String },
}

/// Streaming connection errors.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("connecting to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: Box<tokio_tungstenite::tungstenite::Error>,
    },

    #[error("connecting to {url}: handshake timed out")]
    ConnectTimeout { url: String },

    #[error("sending subscription: {0}")]
    Subscribe(#[source] Box<tokio_tungstenite::tungstenite::Error>),

    #[error("encoding subscription: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("connection already subscribed")]
    AlreadySubscribed,

    #[error("cannot {operation} while connection is {state}")]
    InvalidState {
        operation: &'static str,
        state: ConnectionState,
    },

    #[error("reading message: {0}")]
    Read(#[source] Box<tokio_tungstenite::tungstenite::Error>),

    #[error("connection closed by peer: {reason}")]
    PeerClosed { reason: String },

    #[error("connection has failed")]
    ConnectionFailed,

    #[error("closing connection: {0}")]
    Close(#[source] Box<tokio_tungstenite::tungstenite::Error>),

    #[error("operation cancelled")]
    Cancelled,
}

impl StreamError {
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("shutdown requested")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
