//! Handler for `check config`.

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate configuration file without connecting to anything.
#[allow(clippy::result_large_err)]
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let pm = &config.polymarket;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Stream", pm.market_ws_url());
    output::field("Gamma", &pm.gamma_url);
    output::field("CLOB", &pm.clob_url);
    output::field("Events", pm.events.len());
    output::field("Snapshot", pm.stream.initial_dump);
    output::field("Timeout", format!("{}ms", pm.http.timeout_ms));
    if pm.stream.resolve_concurrency > 1 {
        output::field("Concurrency", pm.stream.resolve_concurrency);
    }

    if pm.events.is_empty() {
        output::warning("No events configured; `run` and `resolve` will refuse to start");
    }

    output::success("Configuration check complete");
    Ok(())
}
