//! Polymarket data transfer objects.
//!
//! Contains types for API and websocket communication:
//! - Websocket subscription messages
//! - REST API responses (events, markets, tokens)

pub mod message;
pub mod response;
