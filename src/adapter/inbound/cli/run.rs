//! Handler for the `run` command.

use tracing::info;

use super::command::RunArgs;
use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::shutdown::Shutdown;

/// Execute the run command.
pub async fn execute(args: &RunArgs, shutdown: &Shutdown) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args, output::is_json());
    config.init_logging();

    let slugs = config.require_events()?;
    print_startup(&config);

    let driver = bootstrap::build_driver(&config);
    let summary = driver
        .run(&slugs, shutdown, |frame| {
            info!(bytes = frame.len(), message = %frame, "Market message");
        })
        .await?;

    output::section("Stopped");
    output::field("Reason", summary.stop);
    output::field("Markets", summary.markets);
    output::field("Tokens", summary.tokens);
    output::field("Messages", summary.frames);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs, force_json_logs: bool) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || force_json_logs {
        config.logging.format = "json".into();
    }
    if args.no_initial_dump {
        config.polymarket.stream.initial_dump = false;
    }
}

fn print_startup(config: &Config) {
    let pm = &config.polymarket;
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Stream", pm.market_ws_url());
    output::field("Events", pm.events.len());
    if output::verbosity() > 0 {
        output::field("Gamma", &pm.gamma_url);
        output::field("Snapshot", pm.stream.initial_dump);
    }
    if !pm.stream.initial_dump {
        output::note("Forward updates only; no initial book snapshots");
    }
}
