//! Config path resolution.
//!
//! Precedence: `--config`, then `POLYFEED_CONFIG`, then `./config.toml`.
//! The first two are handled by clap; this module supplies the fallback.

use std::path::PathBuf;

use crate::infrastructure::config::settings::DEFAULT_CONFIG_PATH;

/// Returns the default config file path (`./config.toml`).
pub fn default_config() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
