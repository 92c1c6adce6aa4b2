//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - `ScriptedEventSource`, an in-memory
//!   [`EventSource`](crate::port::outbound::exchange::EventSource).
//! - [`stream`] - `ScriptedConnector` / `ScriptedConnection`, replaying
//!   frames and recording subscriptions and closes.
//! - [`domain`] - Builders for markets and events.

pub mod domain;
pub mod source;
pub mod stream;
