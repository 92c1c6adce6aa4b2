//! String identifiers used by the exchange.
//!
//! Each id wraps a private `String`, so ids of different kinds cannot be
//! mixed up and construction always goes through `new` or `From`.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_id! {
    /// CLOB token id. One token exists per market outcome; tokens are what
    /// the market stream subscribes to.
    TokenId
}

string_id! {
    /// Market condition id.
    MarketId
}

string_id! {
    /// Human-readable event identifier used by the Gamma API (e.g. `nba-finals-g1`).
    EventSlug
}
