//! Polymarket websocket message types.
//!
//! The market channel takes one subscription message per connection:
//! ```json
//! {"assets_ids":["123...","456..."],"type":"market","initial_dump":true}
//! ```
//! Inbound messages are passed through unparsed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::SubscriptionRequest;

/// Subscription request sent to the Polymarket market channel.
#[derive(Debug, Serialize)]
pub struct PolymarketSubscribeMessage {
    pub assets_ids: Vec<String>,
    #[serde(rename = "type")]
    pub msg_type: String,
    pub initial_dump: bool,
    /// Auxiliary parameters, serialized alongside the fixed fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolymarketSubscribeMessage {
    pub fn new(asset_ids: Vec<String>, initial_dump: bool) -> Self {
        Self {
            assets_ids: asset_ids,
            msg_type: "market".into(),
            initial_dump,
            extra: Map::new(),
        }
    }
}

impl From<&SubscriptionRequest> for PolymarketSubscribeMessage {
    fn from(request: &SubscriptionRequest) -> Self {
        let asset_ids = request
            .token_ids()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        let mut msg = Self::new(asset_ids, request.initial_dump());
        // Fixed fields win over auxiliary keys with the same name.
        msg.extra = request
            .extra()
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "assets_ids" | "type" | "initial_dump"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        msg
    }
}
