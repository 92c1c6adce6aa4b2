//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture. The
//! application layer is written against these traits; adapters implement
//! them for the real exchange, and the testkit implements them with scripted
//! behavior.
//!
//! # Available Ports
//!
//! - [`EventSource`](outbound::exchange::EventSource) - Event lookup by slug
//! - [`MarketConnector`](outbound::stream::MarketConnector),
//!   [`MarketConnection`](outbound::stream::MarketConnection) - Streaming
//!   market data lifecycle

pub mod outbound;
