//! Polymarket exchange configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::EventSlug;

/// Polymarket HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    30_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    10_000
}

impl PolymarketHttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for PolymarketHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Market stream settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketStreamConfig {
    /// Request full book snapshots on subscribe instead of forward updates only.
    #[serde(default = "default_true")]
    pub initial_dump: bool,
    /// Websocket handshake timeout in milliseconds.
    #[serde(default = "default_stream_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Upper bound on the close handshake in milliseconds.
    #[serde(default = "default_stream_close_timeout_ms")]
    pub close_timeout_ms: u64,
    /// Number of event lookups in flight during resolution.
    #[serde(default = "default_resolve_concurrency")]
    pub resolve_concurrency: usize,
}

const fn default_true() -> bool {
    true
}

const fn default_stream_connect_timeout_ms() -> u64 {
    10_000
}

const fn default_stream_close_timeout_ms() -> u64 {
    5_000
}

const fn default_resolve_concurrency() -> usize {
    1
}

impl PolymarketStreamConfig {
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub const fn close_timeout(&self) -> Duration {
        Duration::from_millis(self.close_timeout_ms)
    }
}

impl Default for PolymarketStreamConfig {
    fn default() -> Self {
        Self {
            initial_dump: true,
            connect_timeout_ms: default_stream_connect_timeout_ms(),
            close_timeout_ms: default_stream_close_timeout_ms(),
            resolve_concurrency: default_resolve_concurrency(),
        }
    }
}

/// One configured event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventConfig {
    pub slug: String,
}

/// Polymarket exchange configuration.
///
/// Endpoint URLs have no defaults. An empty URL is reported as a missing
/// field when the configuration is validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolymarketConfig {
    /// Websocket base URL; the market channel lives at `{ws_url}/market`.
    #[serde(default)]
    pub ws_url: String,
    /// Gamma REST API URL (event and market discovery).
    #[serde(default)]
    pub gamma_url: String,
    /// CLOB REST API URL (per-market detail).
    #[serde(default)]
    pub clob_url: String,
    /// Events to resolve, in subscription order.
    #[serde(default)]
    pub events: Vec<EventConfig>,
    /// HTTP client configuration for REST API calls.
    #[serde(default)]
    pub http: PolymarketHttpConfig,
    /// Market stream configuration.
    #[serde(default)]
    pub stream: PolymarketStreamConfig,
}

impl PolymarketConfig {
    /// URL of the market channel.
    #[must_use]
    pub fn market_ws_url(&self) -> String {
        format!("{}/market", self.ws_url.trim_end_matches('/'))
    }

    /// Configured slugs in order.
    #[must_use]
    pub fn slugs(&self) -> Vec<EventSlug> {
        self.events
            .iter()
            .map(|e| EventSlug::new(e.slug.clone()))
            .collect()
    }
}
