//! Exchange-agnostic domain types.

pub mod id;
pub mod market;
pub mod subscription;

pub use id::{EventSlug, MarketId, TokenId};
pub use market::{Event, Market};
pub use subscription::{Frame, SubscriptionRequest};
