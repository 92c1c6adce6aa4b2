use std::process::ExitCode;

use clap::Parser;
use polyfeed::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use polyfeed::adapter::inbound::cli::output::{self, OutputConfig};
use polyfeed::adapter::inbound::cli::{check, market, resolve, run};
use polyfeed::error::{Error, Result};
use polyfeed::shutdown::install_signal_handler;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match dispatch(cli).await {
        Ok(()) | Err(Error::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => {
            let shutdown = install_signal_handler()?;
            run::execute(&args, &shutdown).await
        }
        Commands::Resolve(args) => {
            let shutdown = install_signal_handler()?;
            resolve::execute(&args, &shutdown).await
        }
        Commands::Market(args) => market::execute(&args).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
    }
}
