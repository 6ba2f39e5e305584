//! bbqp Configurator - Terminal-based grill product configurator
//!
//! Running without a subcommand opens the interactive TUI. Subcommands give
//! headless access to the catalog, pricing, and order message building for
//! scripting and automation.

use anyhow::Result;
use clap::{Parser, Subcommand};

use bbqp_configurator::catalog::OptionCatalog;
#[cfg(feature = "ai")]
use bbqp_configurator::cli::ChefArgs;
use bbqp_configurator::cli::{CatalogArgs, CliResult, ConfigArgs, OrderArgs, PriceArgs};
use bbqp_configurator::config::Config;
use bbqp_configurator::tui;

/// bbqp Configurator - Terminal-based grill product configurator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the product option catalog
    Catalog(CatalogArgs),
    /// Price a configuration
    Price(PriceArgs),
    /// Build the order message for a configuration
    Order(OrderArgs),
    /// Show or change application configuration
    Config(ConfigArgs),
    /// Ask the AI chef for advice or a recipe
    #[cfg(feature = "ai")]
    Chef(ChefArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            let result: CliResult<()> = match command {
                Commands::Catalog(args) => args.execute(),
                Commands::Price(args) => args.execute(),
                Commands::Order(args) => args.execute(),
                Commands::Config(args) => args.execute(),
                #[cfg(feature = "ai")]
                Commands::Chef(args) => args.execute(),
            };

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code() as i32);
            }
            Ok(())
        }
        None => run_interactive(),
    }
}

/// Launch the interactive configurator.
fn run_interactive() -> Result<()> {
    let catalog = OptionCatalog::load()?;
    // A missing or unreadable config falls back to defaults; the TUI must
    // still come up
    let config = Config::load().unwrap_or_default();

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(catalog, config);

    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;
    result
}
