//! Ingestion pipeline: resolve, open, subscribe, read until shutdown.

use std::fmt;

use tracing::{debug, error, info, warn};

use super::resolver::MarketResolver;
use crate::domain::{EventSlug, Frame, SubscriptionRequest};
use crate::error::{Error, Result, StreamError};
use crate::port::outbound::exchange::EventSource;
use crate::port::outbound::stream::{MarketConnection, MarketConnector};
use crate::shutdown::Shutdown;

/// Phase in which the shutdown signal was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Resolving,
    Connecting,
    Subscribing,
    Streaming,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Self::Resolving => "resolving",
            Self::Connecting => "connecting",
            Self::Subscribing => "subscribing",
            Self::Streaming => "streaming",
        };
        write!(f, "shutdown while {phase}")
    }
}

/// Outcome of a run that ended on shutdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub events_requested: usize,
    pub markets: usize,
    pub tokens: usize,
    pub frames: u64,
    pub stop: StopReason,
}

impl IngestSummary {
    fn new(events_requested: usize) -> Self {
        Self {
            events_requested,
            markets: 0,
            tokens: 0,
            frames: 0,
            stop: StopReason::Resolving,
        }
    }

    fn stopped(mut self, stop: StopReason) -> Self {
        self.stop = stop;
        self
    }
}

/// Drives one ingestion run over an event source and a connector.
pub struct IngestionDriver<S, C> {
    resolver: MarketResolver<S>,
    connector: C,
    url: String,
    initial_dump: bool,
}

impl<S, C> IngestionDriver<S, C>
where
    S: EventSource,
    C: MarketConnector,
{
    pub fn new(resolver: MarketResolver<S>, connector: C, url: impl Into<String>) -> Self {
        Self {
            resolver,
            connector,
            url: url.into(),
            initial_dump: true,
        }
    }

    /// Request book snapshots on subscribe (default) or forward updates only.
    #[must_use]
    pub fn with_initial_dump(mut self, initial_dump: bool) -> Self {
        self.initial_dump = initial_dump;
        self
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Run the pipeline until `shutdown` fires or the stream fails.
    ///
    /// Every frame is handed to `on_frame` unmodified, in receipt order.
    /// Returns the summary on shutdown. Failure to open, subscribe, or read
    /// is returned as an error; in every case an opened connection has been
    /// closed exactly once before this returns.
    pub async fn run<F>(
        &self,
        slugs: &[EventSlug],
        shutdown: &Shutdown,
        mut on_frame: F,
    ) -> Result<IngestSummary>
    where
        F: FnMut(Frame) + Send,
    {
        let mut summary = IngestSummary::new(slugs.len());

        let markets = match self.resolver.resolve(slugs, shutdown).await {
            Ok(markets) => markets,
            Err(Error::Cancelled) => return Ok(summary.stopped(StopReason::Resolving)),
            Err(e) => return Err(e),
        };

        let request = SubscriptionRequest::for_markets(&markets, self.initial_dump);
        summary.markets = markets.len();
        summary.tokens = request.len();
        if request.is_empty() {
            warn!(
                events = slugs.len(),
                markets = markets.len(),
                "No tokens resolved, subscribing with an empty set"
            );
        }

        let mut conn = match self.connector.open(&self.url, shutdown).await {
            Ok(conn) => conn,
            Err(StreamError::Cancelled) => return Ok(summary.stopped(StopReason::Connecting)),
            Err(e) => {
                error!(url = %self.url, error = %e, "Failed to open market stream");
                return Err(e.into());
            }
        };

        let outcome = Self::stream(&mut conn, &request, shutdown, &mut summary, &mut on_frame).await;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Error closing market stream");
        }
        debug!(state = %conn.state(), "Market stream released");

        match outcome {
            Ok(stop) => {
                info!(frames = summary.frames, reason = %stop, "Ingestion stopped");
                Ok(summary.stopped(stop))
            }
            Err(e) => {
                error!(frames = summary.frames, error = %e, "Ingestion failed");
                Err(e.into())
            }
        }
    }

    async fn stream<F>(
        conn: &mut C::Connection,
        request: &SubscriptionRequest,
        shutdown: &Shutdown,
        summary: &mut IngestSummary,
        on_frame: &mut F,
    ) -> std::result::Result<StopReason, StreamError>
    where
        F: FnMut(Frame) + Send,
    {
        match conn.subscribe(request, shutdown).await {
            Ok(()) => {}
            Err(StreamError::Cancelled) => return Ok(StopReason::Subscribing),
            Err(e) => return Err(e),
        }
        info!(tokens = request.len(), "Listening for market messages...");

        loop {
            match conn.read_message(shutdown).await {
                Ok(frame) => {
                    summary.frames += 1;
                    on_frame(frame);
                }
                Err(StreamError::Cancelled) => return Ok(StopReason::Streaming),
                Err(e) => return Err(e),
            }
        }
    }
}
