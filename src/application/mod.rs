//! Application services (use cases).
//!
//! These services orchestrate the ports to implement ingestion:
//! [`resolver`] turns event slugs into markets, [`ingest`] drives the
//! streaming session.

pub mod ingest;
pub mod resolver;

pub use ingest::{IngestSummary, IngestionDriver, StopReason};
pub use resolver::MarketResolver;
