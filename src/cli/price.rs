//! Price calculation command.

use clap::Args;
use serde::Serialize;

use crate::catalog::OptionCatalog;
use crate::cli::common::{configuration_from_selections, CliError, CliResult};
use crate::pricing;

/// Compute the total price for a configuration
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Selection override as category=value (repeatable); unset categories
    /// keep their defaults
    #[arg(short, long = "select", value_name = "CAT=VALUE")]
    pub select: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable price breakdown for output
#[derive(Serialize, Debug)]
struct PriceOutput {
    selections: Vec<SelectionOutput>,
    total: u32,
}

#[derive(Serialize, Debug)]
struct SelectionOutput {
    category: String,
    option: String,
    price: u32,
}

impl PriceArgs {
    /// Execute the price command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = OptionCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;
        let configuration = configuration_from_selections(&catalog, &self.select)?;

        let total = pricing::total(&catalog, &configuration)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            let selections = catalog
                .categories()
                .iter()
                .map(|category| {
                    // Safe: configuration_from_selections starts from defaults
                    let option = configuration.selection(&category.id).cloned().unwrap();
                    SelectionOutput {
                        category: category.id.clone(),
                        option: option.value,
                        price: option.price,
                    }
                })
                .collect();

            let output = PriceOutput { selections, total };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize price to JSON: {e}")))?;
            println!("{json}");
        } else {
            for category in catalog.categories() {
                let option = configuration.selection(&category.id).cloned().unwrap();
                println!(
                    "{}: {} ({})",
                    category.name,
                    option.label,
                    pricing::format_price(option.price)
                );
            }
            println!();
            println!("Total: {}", pricing::format_price(total));
        }

        Ok(())
    }
}
