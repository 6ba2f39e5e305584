//! AI chef commands (support chat and recipe generation).

use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::ai::{ChefClient, ChefError};
use crate::cli::common::{CliError, CliResult};

/// AI chef commands
#[derive(Args, Debug)]
pub struct ChefArgs {
    #[command(subcommand)]
    command: ChefCommand,
}

#[derive(Subcommand, Debug)]
enum ChefCommand {
    /// Ask the product specialist a question
    Ask(ChefAskArgs),
    /// Generate a BBQ recipe (with an optional food photograph)
    Recipe(ChefRecipeArgs),
}

/// Ask the product specialist a question
#[derive(Args, Debug)]
pub struct ChefAskArgs {
    /// The question to ask
    #[arg(value_name = "PROMPT")]
    prompt: String,
}

/// Generate a BBQ recipe
#[derive(Args, Debug)]
pub struct ChefRecipeArgs {
    /// What to cook (e.g., "pork ribs")
    #[arg(value_name = "PROMPT")]
    prompt: String,

    /// Where to save the generated food photograph (skipped if omitted)
    #[arg(long, value_name = "FILE")]
    image_output: Option<PathBuf>,
}

impl ChefArgs {
    /// Execute chef subcommand
    pub fn execute(&self) -> CliResult<()> {
        // Request/response logging is opt-in via RUST_LOG
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_writer(std::io::stderr)
            .try_init();

        // Chef commands are the only async surface; spin up a runtime here
        // instead of making the whole binary async
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        match &self.command {
            ChefCommand::Ask(args) => runtime.block_on(args.execute()),
            ChefCommand::Recipe(args) => runtime.block_on(args.execute()),
        }
    }
}

impl ChefAskArgs {
    /// Execute ask command
    async fn execute(&self) -> CliResult<()> {
        let client = chef_client()?;
        let answer = client
            .ask_specialist(&self.prompt)
            .await
            .map_err(map_chef_error)?;

        println!("{answer}");
        Ok(())
    }
}

impl ChefRecipeArgs {
    /// Execute recipe command
    async fn execute(&self) -> CliResult<()> {
        let client = chef_client()?;
        let recipe = client
            .generate_recipe(&self.prompt)
            .await
            .map_err(map_chef_error)?;

        println!("{}", recipe.text);

        if let Some(output) = &self.image_output {
            if let Some(image) = &recipe.image {
                let bytes = image.decode().map_err(map_chef_error)?;
                fs::write(output, bytes).map_err(|e| {
                    CliError::io(format!(
                        "Failed to write recipe image to {}: {e}",
                        output.display()
                    ))
                })?;
                println!();
                println!("✓ Saved recipe image to: {}", output.display());
            } else {
                println!();
                println!("No recipe image was generated this time.");
            }
        }

        Ok(())
    }
}

/// Builds a chef client from the environment.
fn chef_client() -> CliResult<ChefClient> {
    ChefClient::from_env().map_err(map_chef_error)
}

/// Maps chef errors to user-visible CLI errors.
///
/// Remote failures become an inert message; nothing in the configurator is
/// affected by the chef being unreachable.
fn map_chef_error(err: ChefError) -> CliError {
    match err {
        ChefError::RemoteUnavailable(_) => CliError::io(
            "The chef is unreachable right now. Your configuration is unaffected; please try again later.",
        ),
        ChefError::MissingApiKey => {
            CliError::validation("GEMINI_API_KEY is not set; the chef commands need an API key.")
        }
        ChefError::InvalidResponse(msg) => {
            CliError::io(format!("The chef sent something unexpected: {msg}"))
        }
    }
}
