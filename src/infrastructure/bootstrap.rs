//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::polymarket::{ClobClient, GammaClient, PolymarketConnector};
use crate::application::{IngestionDriver, MarketResolver};
use crate::infrastructure::config::settings::Config;

/// Ingestion driver wired to the live Polymarket endpoints.
pub type PolymarketDriver = IngestionDriver<GammaClient, PolymarketConnector>;

/// Build the market resolver over the Gamma API.
pub fn build_resolver(config: &Config) -> MarketResolver<GammaClient> {
    let pm = &config.polymarket;
    let gamma = GammaClient::new(pm.gamma_url.clone(), &pm.http);
    MarketResolver::new(gamma).with_concurrency(pm.stream.resolve_concurrency)
}

/// Build the CLOB client.
pub fn build_clob_client(config: &Config) -> ClobClient {
    let pm = &config.polymarket;
    ClobClient::new(pm.clob_url.clone(), &pm.http)
}

/// Build the full ingestion pipeline.
pub fn build_driver(config: &Config) -> PolymarketDriver {
    let pm = &config.polymarket;
    let url = pm.market_ws_url();
    info!(
        gamma = %pm.gamma_url,
        stream = %url,
        initial_dump = pm.stream.initial_dump,
        "Building ingestion pipeline"
    );

    IngestionDriver::new(
        build_resolver(config),
        PolymarketConnector::from_config(&pm.stream),
        url,
    )
    .with_initial_dump(pm.stream.initial_dump)
}
