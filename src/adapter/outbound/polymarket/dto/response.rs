//! Polymarket API response types.
//!
//! Two API surfaces:
//! - **Gamma API** (`gamma-api.polymarket.com`): event and market discovery.
//!   Uses [`GammaEvent`] and [`GammaMarket`].
//! - **CLOB API** (`clob.polymarket.com`): per-market detail.
//!   Uses [`ClobMarket`] and [`ClobToken`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Event, EventSlug, Market, MarketId, TokenId};

// ---------------------------------------------------------------------------
// Gamma API types
// ---------------------------------------------------------------------------

/// Event from the Gamma API with its nested markets.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

impl GammaEvent {
    /// Convert into a domain [`Event`], keeping upstream market order.
    #[must_use]
    pub fn into_event(self, requested: &EventSlug) -> Event {
        let slug = if self.slug.is_empty() {
            requested.clone()
        } else {
            EventSlug::new(self.slug)
        };
        let markets = self.markets.into_iter().map(Market::from).collect();
        Event::new(slug, self.title.unwrap_or_default(), markets)
    }
}

/// Market data from the Gamma API.
///
/// Response format nests several arrays as JSON-encoded strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    /// Gamma's numeric market id, used when no condition id is present.
    #[serde(default)]
    pub id: Option<String>,
    /// Condition ID (same as CLOB's `condition_id`).
    #[serde(default)]
    pub condition_id: String,
    /// Market question.
    #[serde(default)]
    pub question: Option<String>,
    /// JSON-encoded CLOB token IDs.
    #[serde(default)]
    pub clob_token_ids: Option<String>,
}

impl GammaMarket {
    /// Identifier used for the domain market.
    #[must_use]
    pub fn market_id(&self) -> MarketId {
        if self.condition_id.is_empty() {
            MarketId::new(self.id.clone().unwrap_or_default())
        } else {
            MarketId::new(self.condition_id.clone())
        }
    }

    /// Parse the JSON-encoded CLOB token IDs.
    ///
    /// A missing or malformed value yields no tokens.
    pub fn token_ids(&self) -> Vec<String> {
        let Some(raw) = self.clob_token_ids.as_deref() else {
            return Vec::new();
        };
        serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|e| {
            debug!(
                error = %e,
                raw,
                condition_id = %self.condition_id,
                "Failed to parse clobTokenIds"
            );
            Vec::new()
        })
    }
}

impl From<GammaMarket> for Market {
    fn from(m: GammaMarket) -> Self {
        let id = m.market_id();
        let token_ids = m.token_ids().into_iter().map(TokenId::from).collect();
        Market::new(id, m.question.unwrap_or_default(), token_ids)
    }
}

// ---------------------------------------------------------------------------
// CLOB API types
// ---------------------------------------------------------------------------

/// Market detail from the CLOB API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClobMarket {
    pub condition_id: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub tokens: Vec<ClobToken>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub closed: bool,
}

/// One outcome token of a CLOB market.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClobToken {
    pub token_id: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub winner: bool,
}
