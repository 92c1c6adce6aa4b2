//! Handler for the `market` command.

use super::command::MarketArgs;
use super::{config, output};
use crate::domain::MarketId;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Fetch and print one CLOB market.
pub async fn execute(args: &MarketArgs) -> Result<()> {
    let config = config::load_for_command(&args.config)?;
    let client = bootstrap::build_clob_client(&config);

    let market = client
        .market_by_condition_id(&MarketId::new(args.condition_id.clone()))
        .await?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&market)?);
        return Ok(());
    }

    output::section(market.question.as_deref().unwrap_or("(untitled market)"));
    output::field("Condition", &market.condition_id);
    output::field("Active", market.active);
    output::field("Closed", market.closed);
    for token in &market.tokens {
        let price = token
            .price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.3}"));
        let winner = if token.winner { " (winner)" } else { "" };
        output::field(
            &token.outcome,
            format!("{} {}{}", output::highlight(&token.token_id), output::muted(price), winner),
        );
    }
    Ok(())
}
