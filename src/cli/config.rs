//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Contact URL for order handoff
    #[arg(long, value_name = "URL")]
    contact_url: Option<String>,

    /// Order message export directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    contact: ContactOutput,
    export: ExportOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct ContactOutput {
    url: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.contact_url.is_none() && self.output_dir.is_none() && self.theme.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --contact-url, --output-dir, or --theme",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        // Validate and apply contact URL if provided
        if let Some(url) = &self.contact_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CliError::validation(format!(
                    "Contact URL must start with http:// or https:// (got '{url}')"
                )));
            }
            config.contact.url.clone_from(url);
        }

        // Apply output_dir if provided (create if doesn't exist)
        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;

            config.export.output_dir.clone_from(path);
        }

        // Validate and apply theme if provided
        if let Some(theme_str) = &self.theme {
            let theme = match theme_str.to_lowercase().as_str() {
                "auto" => ThemeMode::Auto,
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(CliError::validation(
                        "Invalid theme mode. Must be 'auto', 'light', or 'dark'".to_string(),
                    ))
                }
            };
            config.ui.theme_mode = theme;
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        contact: ContactOutput {
            url: config.contact.url.clone(),
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.to_string_lossy().to_string(),
        },
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("bbqp Configurator Configuration");
    println!("===============================");
    println!();

    println!("Contact:");
    println!("  Order URL: {}", config.contact.url);
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!();

    println!("UI:");
    println!(
        "  Theme Mode: {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    println!();
}
