//! Scripted [`EventSource`] for resolver and driver tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;

use crate::adapter::outbound::http::ExpectedStatus;
use crate::domain::{Event, EventSlug};
use crate::error::{FetchError, ResolutionError};
use crate::port::outbound::exchange::EventSource;

/// Event source answering from a fixed table.
///
/// Slugs without an entry resolve to [`ResolutionError::NotFound`]; slugs
/// registered with [`with_status`](Self::with_status) fail the way an
/// unexpected HTTP status would.
#[derive(Default)]
pub struct ScriptedEventSource {
    events: HashMap<String, Event>,
    statuses: HashMap<String, u16>,
    delays: HashMap<String, Duration>,
    lookups: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups of `event.slug()` with `event`.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.insert(event.slug().to_string(), event);
        self
    }

    /// Fail lookups of `slug` with an unexpected `status`.
    pub fn with_status(mut self, slug: &str, status: u16) -> Self {
        self.statuses.insert(slug.to_string(), status);
        self
    }

    /// Delay the answer for `slug`.
    pub fn with_delay(mut self, slug: &str, delay: Duration) -> Self {
        self.delays.insert(slug.to_string(), delay);
        self
    }

    /// Number of lookups made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Slugs looked up, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl EventSource for ScriptedEventSource {
    async fn event_by_slug(&self, slug: &EventSlug) -> Result<Event, ResolutionError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(slug.to_string());

        if let Some(delay) = self.delays.get(slug.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(status) = self.statuses.get(slug.as_str()) {
            return Err(ResolutionError::Fetch {
                slug: slug.to_string(),
                source: FetchError::UnexpectedStatus {
                    method: reqwest::Method::GET,
                    url: format!("scripted://events?slug={slug}"),
                    expected: ExpectedStatus::from(StatusCode::OK),
                    actual: *status,
                    body: String::new(),
                },
            });
        }

        self.events
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| ResolutionError::NotFound {
                slug: slug.to_string(),
            })
    }

    fn exchange_name(&self) -> &'static str {
        "scripted"
    }
}
