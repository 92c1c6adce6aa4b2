//! Event and market types resolved from the exchange.
//!
//! - [`Event`] - A named grouping of markets, identified by slug
//! - [`Market`] - A tradable outcome set with one token per outcome
//!
//! Both are read-only once fetched.

use std::collections::HashSet;

use serde::Serialize;

use super::id::{EventSlug, MarketId, TokenId};

/// A market within an event.
///
/// Carries the token identifiers used as subscription keys. A market with no
/// tokens is valid and simply contributes nothing to a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Market {
    id: MarketId,
    question: String,
    token_ids: Vec<TokenId>,
}

impl Market {
    /// Create a new market.
    pub fn new(id: MarketId, question: impl Into<String>, token_ids: Vec<TokenId>) -> Self {
        Self {
            id,
            question: question.into(),
            token_ids,
        }
    }

    /// Condition identifier of the market.
    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    /// Market question.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Token identifiers, one per outcome, in exchange order.
    #[must_use]
    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }
}

/// An event grouping zero or more markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    slug: EventSlug,
    title: String,
    markets: Vec<Market>,
}

impl Event {
    /// Create a new event.
    ///
    /// Markets repeated under the same event (same [`MarketId`]) are dropped,
    /// keeping the first occurrence. Upstream order is otherwise preserved.
    pub fn new(slug: EventSlug, title: impl Into<String>, markets: Vec<Market>) -> Self {
        let mut seen = HashSet::new();
        let markets = markets
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();

        Self {
            slug,
            title: title.into(),
            markets,
        }
    }

    #[must_use]
    pub const fn slug(&self) -> &EventSlug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    /// Consume the event and return its markets.
    #[must_use]
    pub fn into_markets(self) -> Vec<Market> {
        self.markets
    }
}
