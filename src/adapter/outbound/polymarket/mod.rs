//! Polymarket exchange integration.
//!
//! - [`client`] - Gamma (event lookup) and CLOB (market detail) REST clients
//! - [`stream`] - market channel websocket connection
//! - [`settings`] - endpoint and timeout configuration

pub mod client;
pub mod dto;
pub mod settings;
pub mod stream;

pub use client::{ClobClient, GammaClient};
pub use settings::PolymarketConfig;
pub use stream::{PolymarketConnection, PolymarketConnector};
