//! Polymarket REST API clients.
//!
//! Two API surfaces:
//! - **Gamma API** (`gamma-api.polymarket.com`): event lookup by slug, with
//!   nested markets and their CLOB token ids.
//! - **CLOB API** (`clob.polymarket.com`): per-market detail by condition id.
//!
//! Both are thin wrappers over [`ResourceClient`].

use async_trait::async_trait;
use tracing::{debug, info};
use url::form_urlencoded;

use super::dto::response::{ClobMarket, GammaEvent};
use super::settings::PolymarketHttpConfig;
use crate::adapter::outbound::http::{ExpectedStatus, ResourceClient};
use crate::domain::{Event, EventSlug, MarketId};
use crate::error::{FetchError, ResolutionError};
use crate::port::outbound::exchange::EventSource;

/// Client for the Gamma API.
#[derive(Debug, Clone)]
pub struct GammaClient {
    resources: ResourceClient,
}

impl GammaClient {
    /// Create a Gamma client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http: &PolymarketHttpConfig) -> Self {
        Self {
            resources: ResourceClient::with_connect_timeout(
                base_url,
                http.timeout(),
                http.connect_timeout(),
            ),
        }
    }

    /// Fetch raw Gamma events matching a slug.
    pub async fn get_events_by_slug(&self, slug: &str) -> Result<Vec<GammaEvent>, FetchError> {
        let encoded: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
        let path = format!("/events?slug={encoded}");

        info!(slug = %slug, "Fetching event (Gamma)");

        let events: Vec<GammaEvent> = self
            .resources
            .get_content(&path, &ExpectedStatus::ok())
            .await?;

        debug!(slug = %slug, count = events.len(), "Fetched events from Gamma");
        Ok(events)
    }
}

#[async_trait]
impl EventSource for GammaClient {
    async fn event_by_slug(&self, slug: &EventSlug) -> Result<Event, ResolutionError> {
        let events = self
            .get_events_by_slug(slug.as_str())
            .await
            .map_err(|source| ResolutionError::Fetch {
                slug: slug.to_string(),
                source,
            })?;

        let position = events
            .iter()
            .position(|e| e.slug == slug.as_str())
            .unwrap_or(0);

        events
            .into_iter()
            .nth(position)
            .map(|e| e.into_event(slug))
            .ok_or_else(|| ResolutionError::NotFound {
                slug: slug.to_string(),
            })
    }

    fn exchange_name(&self) -> &'static str {
        "Polymarket"
    }
}

/// Client for the CLOB API.
#[derive(Debug, Clone)]
pub struct ClobClient {
    resources: ResourceClient,
}

impl ClobClient {
    /// Create a CLOB client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http: &PolymarketHttpConfig) -> Self {
        Self {
            resources: ResourceClient::with_connect_timeout(
                base_url,
                http.timeout(),
                http.connect_timeout(),
            ),
        }
    }

    /// Fetch one market's detail by condition id.
    pub async fn market_by_condition_id(&self, condition_id: &MarketId) -> Result<ClobMarket, FetchError> {
        let encoded: String =
            form_urlencoded::byte_serialize(condition_id.as_str().as_bytes()).collect();
        let path = format!("/markets/{encoded}");

        info!(condition_id = %condition_id, "Fetching market (CLOB)");

        self.resources
            .get_content(&path, &ExpectedStatus::ok())
            .await
    }
}
