//! Order message generation command.

use clap::builder::TypedValueParser as _;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::catalog::OptionCatalog;
use crate::cli::common::{configuration_from_selections, CliError, CliResult};
use crate::config::Config;
use crate::order::OrderMessage;

/// Build the order message for handoff to the contact channel
#[derive(Debug, Clone, Args)]
pub struct OrderArgs {
    /// Selection override as category=value (repeatable); unset categories
    /// keep their defaults
    #[arg(short, long = "select", value_name = "CAT=VALUE")]
    pub select: Vec<String>,

    /// Engraving artwork file name (meaningful only with style=engraving)
    #[arg(long, value_name = "NAME")]
    pub engraving_file: Option<String>,

    /// Write the message to a file instead of stdout
    /// (defaults to bbqp_order_[date].txt in the configured export dir)
    // The default PathBuf value parser rejects empty values, which would make
    // the empty-string sentinel from default_missing_value unparseable.
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: Option<PathBuf>,

    /// Print the compose link for the contact channel instead of the message
    #[arg(long, conflicts_with = "output")]
    pub link: bool,
}

impl OrderArgs {
    /// Execute the order command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = OptionCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;
        let mut configuration = configuration_from_selections(&catalog, &self.select)?;

        if let Some(file_name) = &self.engraving_file {
            configuration.attach_engraving_file(file_name.clone());
        }

        let message = OrderMessage::build(&catalog, &configuration)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.link {
            let config = Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
            println!("{}", message.to_url(&config.contact.url));
        } else if let Some(output) = &self.output {
            let output_path = self.resolve_output_path(output)?;

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::io(format!(
                        "Failed to create output directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }

            fs::write(&output_path, message.to_text()).map_err(|e| {
                CliError::io(format!(
                    "Failed to write order message to {}: {e}",
                    output_path.display()
                ))
            })?;

            println!("✓ Exported order message to: {}", output_path.display());
        } else {
            println!("{}", message.to_text());
        }

        Ok(())
    }

    /// Resolve the output path: explicit file, or auto-generated name in the
    /// configured export directory when `--output` is given without a value.
    fn resolve_output_path(&self, output: &PathBuf) -> CliResult<PathBuf> {
        if output.as_os_str().is_empty() {
            let config = Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
            Ok(config
                .export
                .output_dir
                .join(OrderMessage::default_export_file_name()))
        } else {
            Ok(output.clone())
        }
    }
}
