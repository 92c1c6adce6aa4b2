//! Scripted [`MarketConnector`] and [`MarketConnection`] implementations.
//!
//! The connector hands out connections that replay a fixed sequence of reads.
//! Once the script is exhausted a read waits for shutdown, the way a quiet
//! live socket would. A shared [`ScriptedHandle`] records what the code under
//! test did: opens, subscription requests, and close calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_tungstenite::tungstenite;

use crate::domain::{Frame, SubscriptionRequest};
use crate::error::StreamError;
use crate::port::outbound::stream::{ConnectionState, MarketConnection, MarketConnector};
use crate::shutdown::Shutdown;

/// One scripted read outcome.
#[derive(Debug, Clone)]
pub enum ScriptedRead {
    Frame(Frame),
    /// Transport failure; moves the connection to `Failed`.
    Fail,
    /// Server close frame with the given reason.
    PeerClose(String),
}

/// Observations shared between a connector, its connections, and the test.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHandle {
    opens: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    subscriptions: Arc<Mutex<Vec<SubscriptionRequest>>>,
    urls: Arc<Mutex<Vec<String>>>,
    reads: Arc<AtomicUsize>,
}

impl ScriptedHandle {
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Subscription requests sent, in order.
    pub fn subscriptions(&self) -> Vec<SubscriptionRequest> {
        self.subscriptions.lock().clone()
    }

    /// URLs passed to `open`, in order.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

/// Connector handing out [`ScriptedConnection`]s.
#[derive(Debug, Default)]
pub struct ScriptedConnector {
    reads: Vec<ScriptedRead>,
    fail_open: bool,
    fail_subscribe: bool,
    handshake_delay: Option<Duration>,
    handle: ScriptedHandle,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames every opened connection will yield, in order.
    pub fn with_frames<I, F>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Frame>,
    {
        self.reads
            .extend(frames.into_iter().map(|f| ScriptedRead::Frame(f.into())));
        self
    }

    /// Append an arbitrary scripted read.
    pub fn with_read(mut self, read: ScriptedRead) -> Self {
        self.reads.push(read);
        self
    }

    /// Make `open` fail.
    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Make `subscribe` fail with a transport error.
    pub fn failing_subscribe(mut self) -> Self {
        self.fail_subscribe = true;
        self
    }

    /// Delay the handshake, so tests can cancel while connecting.
    pub fn with_handshake_delay(mut self, delay: Duration) -> Self {
        self.handshake_delay = Some(delay);
        self
    }

    pub fn handle(&self) -> ScriptedHandle {
        self.handle.clone()
    }
}

#[async_trait]
impl MarketConnector for ScriptedConnector {
    type Connection = ScriptedConnection;

    async fn open(&self, url: &str, shutdown: &Shutdown) -> Result<ScriptedConnection, StreamError> {
        self.handle.urls.lock().push(url.to_string());

        if let Some(delay) = self.handshake_delay {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => return Err(StreamError::Cancelled),
                () = tokio::time::sleep(delay) => {}
            }
        }

        if self.fail_open {
            return Err(StreamError::ConnectTimeout {
                url: url.to_string(),
            });
        }

        self.handle.opens.fetch_add(1, Ordering::SeqCst);
        Ok(ScriptedConnection {
            state: ConnectionState::Connected,
            reads: self.reads.iter().cloned().collect(),
            fail_subscribe: self.fail_subscribe,
            handle: self.handle.clone(),
        })
    }
}

/// Connection replaying a scripted read sequence.
#[derive(Debug)]
pub struct ScriptedConnection {
    state: ConnectionState,
    reads: VecDeque<ScriptedRead>,
    fail_subscribe: bool,
    handle: ScriptedHandle,
}

#[async_trait]
impl MarketConnection for ScriptedConnection {
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
        if shutdown.is_triggered() {
            return Err(StreamError::Cancelled);
        }
        if self.fail_subscribe {
            self.state = ConnectionState::Failed;
            return Err(StreamError::Subscribe(Box::new(
                tungstenite::Error::ConnectionClosed,
            )));
        }

        self.handle.subscriptions.lock().push(request.clone());
        self.state = ConnectionState::Subscribed;
        Ok(())
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
        if shutdown.is_triggered() {
            return Err(StreamError::Cancelled);
        }

        match self.reads.pop_front() {
            Some(ScriptedRead::Frame(frame)) => {
                self.handle.reads.fetch_add(1, Ordering::SeqCst);
                Ok(frame)
            }
            Some(ScriptedRead::Fail) => {
                self.state = ConnectionState::Failed;
                Err(StreamError::Read(Box::new(tungstenite::Error::ConnectionClosed)))
            }
            Some(ScriptedRead::PeerClose(reason)) => {
                self.state = ConnectionState::Failed;
                Err(StreamError::PeerClosed { reason })
            }
            None => {
                shutdown.cancelled().await;
                Err(StreamError::Cancelled)
            }
        }
    }

    async fn close(&mut self) -> Result<(), StreamError> {
        self.handle.closes.fetch_add(1, Ordering::SeqCst);
        if !self.state.is_terminal() {
            self.state = ConnectionState::Closed;
        }
        Ok(())
    }
}
