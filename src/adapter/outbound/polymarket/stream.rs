//! Polymarket market channel connection.
//!
//! # Connection Lifecycle
//!
//! 1. **Open**: [`PolymarketConnector::open`] performs the websocket handshake,
//!    bounded by the connect timeout and the caller's shutdown signal.
//! 2. **Subscribe**: exactly one subscription frame per connection.
//! 3. **Read**: frames are handed back in receipt order and unparsed.
//!    Pings are answered by tungstenite, which flushes the queued pong on
//!    the next poll of the stream.
//! 4. **Close**: idempotent, bounded by the close timeout.
//!
//! The connection does not reconnect. A transport error or a close frame from
//! the server moves it to `Failed`, after which every read fails immediately.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, trace, warn};

use super::dto::message::PolymarketSubscribeMessage;
use super::settings::PolymarketStreamConfig;
use crate::domain::{Frame, SubscriptionRequest};
use crate::error::StreamError;
use crate::port::outbound::stream::{ConnectionState, MarketConnection, MarketConnector};
use crate::shutdown::Shutdown;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Number of asset ids shown in the subscription log line.
const LOG_PREVIEW: usize = 5;

/// Opens connections to the Polymarket market channel.
#[derive(Debug, Clone)]
pub struct PolymarketConnector {
    connect_timeout: Duration,
    close_timeout: Duration,
}

impl PolymarketConnector {
    #[must_use]
    pub const fn new(connect_timeout: Duration, close_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            close_timeout,
        }
    }

    #[must_use]
    pub const fn from_config(config: &PolymarketStreamConfig) -> Self {
        Self::new(config.connect_timeout(), config.close_timeout())
    }
}

impl Default for PolymarketConnector {
    fn default() -> Self {
        Self::from_config(&PolymarketStreamConfig::default())
    }
}

#[async_trait]
impl MarketConnector for PolymarketConnector {
    type Connection = PolymarketConnection;

    async fn open(&self, url: &str, shutdown: &Shutdown) -> Result<PolymarketConnection, StreamError> {
        let mut conn = PolymarketConnection::new(url, self.close_timeout);
        conn.state = ConnectionState::Connecting;
        info!(url = %url, "Connecting to WebSocket");

        let handshake = tokio::time::timeout(self.connect_timeout, connect_async(url));

        let outcome = tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                info!(url = %url, "Handshake aborted by shutdown");
                conn.state = ConnectionState::Closed;
                return Err(StreamError::Cancelled);
            }
            outcome = handshake => outcome,
        };

        match outcome {
            Ok(Ok((ws, response))) => {
                info!(status = %response.status(), "WebSocket connected");
                conn.ws = Some(ws);
                conn.state = ConnectionState::Connected;
                Ok(conn)
            }
            Ok(Err(e)) => {
                error!(url = %url, error = %e, "WebSocket handshake failed");
                Err(StreamError::Connect {
                    url: url.to_string(),
                    source: Box::new(e),
                })
            }
            Err(_) => {
                error!(url = %url, timeout = ?self.connect_timeout, "WebSocket handshake timed out");
                Err(StreamError::ConnectTimeout {
                    url: url.to_string(),
                })
            }
        }
    }
}

/// A single market channel session.
pub struct PolymarketConnection {
    url: String,
    ws: Option<WsStream>,
    state: ConnectionState,
    close_timeout: Duration,
}

impl PolymarketConnection {
    fn new(url: &str, close_timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            ws: None,
            state: ConnectionState::Disconnected,
            close_timeout,
        }
    }

    /// URL this connection was opened against.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn fail(&mut self) {
        self.state = ConnectionState::Failed;
        self.ws = None;
    }
}

impl std::fmt::Debug for PolymarketConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolymarketConnection")
            .field("url", &self.url)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn log_subscription(asset_ids: &[String], initial_dump: bool) {
    let total = asset_ids.len();
    if total <= LOG_PREVIEW {
        info!(assets = ?asset_ids, initial_dump, "Subscribing to assets");
    } else {
        let preview: Vec<_> = asset_ids.iter().take(LOG_PREVIEW).collect();
        info!(assets = ?preview, more = total - LOG_PREVIEW, initial_dump, "Subscribing to assets");
    }
}

#[async_trait]
impl MarketConnection for PolymarketConnection {
    fn state(&self) -> ConnectionState {
        self.state
    }

    async fn subscribe(
        &mut self,
        request: &SubscriptionRequest,
        shutdown: &Shutdown,
    ) -> Result<(), StreamError> {
        match self.state {
            ConnectionState::Connected => {}
            ConnectionState::Subscribed => return Err(StreamError::AlreadySubscribed),
            state => {
                return Err(StreamError::InvalidState {
                    operation: "subscribe",
                    state,
                })
            }
        }
        let Some(ws) = self.ws.as_mut() else {
            return Err(StreamError::InvalidState {
                operation: "subscribe",
                state: self.state,
            });
        };

        let msg = PolymarketSubscribeMessage::from(request);
        let json = serde_json::to_string(&msg)?;
        log_subscription(&msg.assets_ids, msg.initial_dump);

        let sent = tokio::select! {
            biased;
            () = shutdown.cancelled() => return Err(StreamError::Cancelled),
            sent = ws.send(Message::Text(json)) => sent,
        };

        match sent {
            Ok(()) => {
                self.state = ConnectionState::Subscribed;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to send subscription");
                self.fail();
                Err(StreamError::Subscribe(Box::new(e)))
            }
        }
    }

    async fn read_message(&mut self, shutdown: &Shutdown) -> Result<Frame, StreamError> {
        match self.state {
            ConnectionState::Connected | ConnectionState::Subscribed => {}
            ConnectionState::Failed => return Err(StreamError::ConnectionFailed),
            state => {
                return Err(StreamError::InvalidState {
                    operation: "read",
                    state,
                })
            }
        }
        let Some(ws) = self.ws.as_mut() else {
            return Err(StreamError::ConnectionFailed);
        };

        loop {
            let next = tokio::select! {
                biased;
                () = shutdown.cancelled() => return Err(StreamError::Cancelled),
                next = ws.next() => next,
            };

            match next {
                Some(Ok(Message::Text(text))) => {
                    trace!(bytes = text.len(), "Received WebSocket text frame");
                    return Ok(Frame::from(text));
                }
                Some(Ok(Message::Binary(data))) => {
                    trace!(bytes = data.len(), "Received WebSocket binary frame");
                    return Ok(Frame::new(data));
                }
                Some(Ok(Message::Ping(_))) => {
                    trace!("Received WebSocket ping");
                }
                Some(Ok(Message::Close(frame))) => {
                    info!(frame = ?frame, "WebSocket closed by server");
                    let reason = frame.map(|f| f.reason.to_string()).unwrap_or_default();
                    self.fail();
                    return Err(StreamError::PeerClosed { reason });
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!(error = %e, "WebSocket error");
                    self.fail();
                    return Err(StreamError::Read(Box::new(e)));
                }
                None => {
                    warn!(url = %self.url, "WebSocket stream ended");
                    self.fail();
                    return Err(StreamError::PeerClosed {
                        reason: "stream ended".into(),
                    });
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), StreamError> {
        if self.state.is_terminal() {
            return Ok(());
        }
        self.state = ConnectionState::Closing;

        let Some(mut ws) = self.ws.take() else {
            self.state = ConnectionState::Closed;
            return Ok(());
        };

        debug!(url = %self.url, "Closing WebSocket");
        let result = tokio::time::timeout(self.close_timeout, ws.close(None)).await;
        self.state = ConnectionState::Closed;

        match result {
            Ok(Ok(())) => {
                info!(url = %self.url, "WebSocket closed");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(error = %e, "WebSocket close handshake failed");
                Err(StreamError::Close(Box::new(e)))
            }
            Err(_) => {
                warn!(timeout = ?self.close_timeout, "WebSocket close timed out, dropping");
                Ok(())
            }
        }
    }
}
