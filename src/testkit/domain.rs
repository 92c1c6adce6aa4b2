//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`TokenId`], [`Market`], and
//! [`Event`] so tests focus on assertions rather than construction
//! boilerplate.

use crate::domain::{Event, EventSlug, Market, MarketId, TokenId};

/// Generate `n` token IDs named `t0`, `t1`, ..., `t{n-1}`.
pub fn make_tokens(n: usize) -> Vec<TokenId> {
    (0..n).map(|i| TokenId::from(format!("t{i}"))).collect()
}

/// Create a [`TokenId`] from a string.
pub fn token(id: &str) -> TokenId {
    TokenId::from(id)
}

/// Create a [`MarketId`] from a string.
pub fn market_id(id: &str) -> MarketId {
    MarketId::from(id)
}

/// Create a market with the given outcome tokens.
pub fn market(id: &str, tokens: &[&str]) -> Market {
    Market::new(
        market_id(id),
        format!("Question for {id}?"),
        tokens.iter().map(|t| token(t)).collect(),
    )
}

/// Create an event titled after its slug.
pub fn event(slug: &str, markets: Vec<Market>) -> Event {
    Event::new(EventSlug::from(slug), slug.to_uppercase(), markets)
}
