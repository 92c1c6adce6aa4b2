//! Exchange port for event discovery.

use async_trait::async_trait;

use crate::domain::{Event, EventSlug};
use crate::error::ResolutionError;

/// Looks up events by slug.
///
/// Implementations hold no mutable state across calls and may be shared by
/// concurrent lookups.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch one event with its markets.
    async fn event_by_slug(&self, slug: &EventSlug) -> Result<Event, ResolutionError>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}
