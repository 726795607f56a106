use std::process::ExitCode;

use clap::Parser;
use pricedex::adapter::inbound::cli::command::Cli;
use pricedex::adapter::inbound::cli::{handler, output};
use pricedex::infrastructure::bootstrap::build_engine;
use pricedex::infrastructure::config::Config;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config {}: {e}", cli.config.display()));
            return ExitCode::FAILURE;
        }
    };
    config.init_logging();

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "Failed to build pricing engine");
            return ExitCode::FAILURE;
        }
    };

    match handler::execute(&cli.command, &engine, cli.json).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
