//! Catalog display command.

use clap::Args;
use serde::Serialize;

use crate::catalog::OptionCatalog;
use crate::cli::common::{CliError, CliResult};
use crate::models::ConfigCategory;
use crate::pricing;

/// Display the product option catalog
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable catalog for output
#[derive(Serialize, Debug)]
struct CatalogOutput<'a> {
    categories: &'a [ConfigCategory],
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = OptionCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        if self.json {
            let output = CatalogOutput {
                categories: catalog.categories(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize catalog to JSON: {e}")))?;
            println!("{json}");
        } else {
            output_human_readable(&catalog);
        }

        Ok(())
    }
}

/// Output the catalog in human-readable format
fn output_human_readable(catalog: &OptionCatalog) {
    for category in catalog.categories() {
        println!("{} ({})", category.name, category.id);
        for (i, option) in category.options.iter().enumerate() {
            let default_marker = if i == 0 { " (default)" } else { "" };
            if option.price > 0 {
                println!(
                    "  {} [{}] +{}{}",
                    option.label,
                    option.value,
                    pricing::format_price(option.price),
                    default_marker
                );
            } else {
                println!("  {} [{}]{}", option.label, option.value, default_marker);
            }
        }
        println!();
    }
}
