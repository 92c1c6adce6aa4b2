//! Typed REST resource fetching.
//!
//! [`ResourceClient`] issues a JSON request against a fixed base URL, checks
//! the response status against an [`ExpectedStatus`] set and decodes the body
//! into a caller-chosen type.

mod client;
mod status;

pub use client::{Resource, ResourceClient};
pub use status::ExpectedStatus;
