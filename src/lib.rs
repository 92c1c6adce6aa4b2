//! Polyfeed - Polymarket market-data ingestion.
//!
//! Resolves configured event slugs into CLOB token ids over the Gamma REST
//! API, then holds one websocket subscription to the market channel and hands
//! every inbound message to a consumer until shutdown.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Ids, events, markets, subscription requests, frames
//! - [`port`] - Traits at the seams: event lookup and streaming connections
//! - [`adapter`] - Typed REST client, Polymarket clients and websocket, CLI
//! - [`application`] - Market resolution and the ingestion driver
//! - [`infrastructure`] - Configuration, logging, composition root
//! - [`shutdown`] - Root cancellation signal
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use polyfeed::infrastructure::bootstrap;
//! use polyfeed::infrastructure::config::Config;
//! use polyfeed::shutdown::install_signal_handler;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! let shutdown = install_signal_handler()?;
//! let driver = bootstrap::build_driver(&config);
//! let summary = driver
//!     .run(&config.require_events()?, &shutdown, |frame| println!("{frame}"))
//!     .await?;
//! println!("{} messages", summary.frames);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
pub mod shutdown;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
