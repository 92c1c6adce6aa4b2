//! Streaming market data port.
//!
//! A connection moves through
//! `Disconnected -> Connecting -> Connected -> Subscribed -> Closing -> Closed`,
//! and to the terminal `Failed` state from any non-terminal state on an
//! unrecoverable transport error.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Frame, SubscriptionRequest};
use crate::error::StreamError;
use crate::shutdown::Shutdown;

/// Lifecycle state of a market connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Subscribed,
    Closing,
    Closed,
    Failed,
}

impl ConnectionState {
    /// `Closed` and `Failed` accept no further operations.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Failed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Subscribed => "subscribed",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One live streaming session.
///
/// Owned by a single reader; not meant to be shared between tasks.
#[async_trait]
pub trait MarketConnection: Send {
    /// Current lifecycle state.
    fn state(&self) -> ConnectionState;

    /// Send the single subscription frame for this connection.
    ///
    /// Valid only in `Connected`. A second call fails with
    /// [`StreamError::AlreadySubscribed`].
    async fn subscribe(
        &mut self,
        request: &SubscriptionRequest,
        shutdown: &Shutdown,
    ) -> Result<(), StreamError>;

    /// Wait for the next inbound frame.
    ///
    /// Returns frames in receipt order. Returns [`StreamError::Cancelled`] as
    /// soon as `shutdown` fires. A transport failure moves the connection to
    /// `Failed`, after which every read fails immediately.
    async fn read_message(&mut self, shutdown: &Shutdown) -> Result<Frame, StreamError>;

    /// Release the session. Idempotent; closing a closed or failed connection
    /// succeeds without doing anything.
    async fn close(&mut self) -> Result<(), StreamError>;
}

/// Opens market connections.
#[async_trait]
pub trait MarketConnector: Send + Sync {
    type Connection: MarketConnection;

    /// Establish a session with `url`, returning it in the `Connected` state.
    ///
    /// Returns [`StreamError::Cancelled`] if `shutdown` fires before the
    /// handshake completes.
    async fn open(&self, url: &str, shutdown: &Shutdown) -> Result<Self::Connection, StreamError>;
}
