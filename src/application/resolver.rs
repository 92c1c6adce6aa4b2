//! Event slug resolution.
//!
//! Turns configured slugs into the markets to subscribe to. A failed lookup
//! is logged and skipped; it never aborts the run.

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{EventSlug, Market};
use crate::error::{Error, Result};
use crate::port::outbound::exchange::EventSource;
use crate::shutdown::Shutdown;

/// Resolves event slugs into markets through an [`EventSource`].
pub struct MarketResolver<S> {
    source: S,
    concurrency: usize,
}

impl<S: EventSource> MarketResolver<S> {
    /// Resolver issuing one lookup at a time.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            concurrency: 1,
        }
    }

    /// Allow up to `concurrency` lookups in flight. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `slugs` into markets.
    ///
    /// The result is each resolved event's markets, concatenated in slug
    /// order. Returns [`Error::Cancelled`] if `shutdown` fires first.
    pub async fn resolve(&self, slugs: &[EventSlug], shutdown: &Shutdown) -> Result<Vec<Market>> {
        info!(
            exchange = self.source.exchange_name(),
            events = slugs.len(),
            concurrency = self.concurrency,
            "Resolving events"
        );

        // `buffered` yields in input order regardless of completion order.
        let lookups = stream::iter(slugs)
            .map(|slug| async move { (slug, self.source.event_by_slug(slug).await) })
            .buffered(self.concurrency)
            .collect::<Vec<_>>();

        let results = tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                info!("Resolution aborted by shutdown");
                return Err(Error::Cancelled);
            }
            results = lookups => results,
        };

        let mut markets = Vec::new();
        let mut failed = 0usize;
        for (slug, result) in results {
            match result {
                Ok(event) => {
                    debug!(
                        slug = %slug,
                        title = %event.title(),
                        markets = event.markets().len(),
                        "Event resolved"
                    );
                    markets.extend(event.into_markets());
                }
                Err(e) => {
                    failed += 1;
                    warn!(slug = %slug, error = %e, "Failed to resolve event, skipping");
                }
            }
        }

        info!(
            resolved = slugs.len() - failed,
            failed,
            markets = markets.len(),
            "Resolution complete"
        );
        Ok(markets)
    }
}
