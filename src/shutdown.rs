//! Root cancellation signal.
//!
//! A [`ShutdownTrigger`] fires once; every [`Shutdown`] clone observes it.
//! Suspending operations race their I/O against [`Shutdown::cancelled`].

use tokio::sync::watch;
use tracing::info;

/// Sending half of the root cancellation signal.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Fire the signal. Idempotent.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

/// Receiving half of the root cancellation signal.
///
/// A dropped [`ShutdownTrigger`] is treated the same as a fired one.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// Create a linked trigger/signal pair.
    #[must_use]
    pub fn channel() -> (ShutdownTrigger, Self) {
        let (tx, rx) = watch::channel(false);
        (ShutdownTrigger { tx }, Self { rx })
    }

    /// Whether shutdown has been requested.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once shutdown is requested.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Wire process signals (Ctrl-C, and SIGTERM on Unix) to a new trigger.
///
/// The returned [`Shutdown`] fires on the first signal received.
pub fn install_signal_handler() -> std::io::Result<Shutdown> {
    let (trigger, shutdown) = Shutdown::channel();

    #[cfg(unix)]
    let mut sigterm =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => info!("Interrupt received"),
                _ = sigterm.recv() => info!("Termination signal received"),
            }
        }
        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
            info!("Interrupt received");
        }
        trigger.trigger();
    });

    Ok(shutdown)
}
