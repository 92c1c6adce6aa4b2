//! Subscription requests and inbound stream frames.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};

use super::id::TokenId;
use super::market::Market;

/// The set of tokens a single connection subscribes to.
///
/// Token order follows first appearance; duplicates are dropped on
/// construction. A request is built once per connection lifetime. To change
/// the subscription, open a new connection with a new request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRequest {
    token_ids: Vec<TokenId>,
    initial_dump: bool,
    extra: Map<String, Value>,
}

impl SubscriptionRequest {
    /// Build a request from an ordered list of tokens.
    ///
    /// `initial_dump` selects full book snapshots (`true`) or forward
    /// incremental updates only (`false`).
    pub fn new(token_ids: impl IntoIterator<Item = TokenId>, initial_dump: bool) -> Self {
        let mut seen = HashSet::new();
        let token_ids = token_ids
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();

        Self {
            token_ids,
            initial_dump,
            extra: Map::new(),
        }
    }

    /// Build a request covering every token of the given markets.
    pub fn for_markets(markets: &[Market], initial_dump: bool) -> Self {
        Self::new(
            markets.iter().flat_map(|m| m.token_ids().iter().cloned()),
            initial_dump,
        )
    }

    /// Attach auxiliary parameters sent alongside the token list.
    #[must_use]
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    #[must_use]
    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    #[must_use]
    pub const fn initial_dump(&self) -> bool {
        self.initial_dump
    }

    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }
}

/// One inbound message from the market stream, delivered unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(Vec<u8>);

impl Frame {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The frame as UTF-8 text, if it is valid UTF-8.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl From<String> for Frame {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&str> for Frame {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}
