//! Handler for the `resolve` command.

use serde_json::json;

use super::command::ConfigPathArg;
use super::{config, output};
use crate::domain::{Market, SubscriptionRequest};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::shutdown::Shutdown;

/// Resolve configured events and print the markets, without streaming.
pub async fn execute(args: &ConfigPathArg, shutdown: &Shutdown) -> Result<()> {
    let config = config::load_for_command(&args.config)?;
    let slugs = config.require_events()?;
    let resolver = bootstrap::build_resolver(&config);

    let markets = resolver.resolve(&slugs, shutdown).await?;
    let request = SubscriptionRequest::for_markets(&markets, config.polymarket.stream.initial_dump);

    if output::is_json() {
        output::json_output(json!({
            "events": slugs,
            "markets": markets,
            "tokens": request.token_ids(),
        }));
        return Ok(());
    }

    output::section("Markets");
    if markets.is_empty() {
        output::warning("No markets resolved");
    }
    for market in &markets {
        print_market(market);
    }

    output::section("Summary");
    output::field("Events", slugs.len());
    output::field("Markets", markets.len());
    output::field("Tokens", request.len());
    Ok(())
}

fn print_market(market: &Market) {
    output::field("Market", output::highlight(market.id()));
    output::note(market.question());
    if market.token_ids().is_empty() {
        output::note("(no tokens)");
    }
    for token in market.token_ids() {
        output::field("Token", output::muted(token));
    }
}
