//! Command-line interface definitions.
//!
//! Operator commands that exercise the pricing engine against a config file:
//! resolve a price, select a listing, inspect a collectible, or dump its
//! price history.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Collectible price resolution and listing selection CLI
#[derive(Parser, Debug)]
#[command(name = "pricedex")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the pricedex CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the current price of a collectible
    Price(IdArg),

    /// Select the best listing for a collectible (prints JSON)
    Listing(ListingArgs),

    /// Show a collectible's configuration and display data
    Info(IdArg),

    /// Show a collectible's price history
    History(HistoryArgs),
}

/// Collectible UUID or slug.
#[derive(Args, Debug)]
pub struct IdArg {
    /// Collectible UUID or slug
    pub id: String,
}

/// Arguments for `pricedex listing`.
#[derive(Args, Debug)]
pub struct ListingArgs {
    /// Collectible UUID or slug
    pub id: String,

    /// Target price; resolved from the price source when omitted
    #[arg(long)]
    pub target: Option<Decimal>,
}

/// Arguments for `pricedex history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Collectible UUID or slug
    pub id: String,

    /// Maximum number of points
    #[arg(long, default_value_t = 30)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn listing_parses_target_and_global_config() {
        let cli = Cli::parse_from([
            "pricedex",
            "listing",
            "charizard-base",
            "--target",
            "16.94",
            "--config",
            "other.toml",
        ]);

        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Commands::Listing(args) => {
                assert_eq!(args.id, "charizard-base");
                assert_eq!(args.target, Some(dec!(16.94)));
            }
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn history_limit_defaults_to_thirty() {
        let cli = Cli::parse_from(["pricedex", "history", "charizard-base"]);
        match cli.command {
            Commands::History(args) => assert_eq!(args.limit, 30),
            other => panic!("expected history, got {other:?}"),
        }
    }
}
