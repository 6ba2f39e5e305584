//! Product option catalog.
//!
//! This module provides access to the embedded option catalog: the fixed
//! list of configurable categories and their priced options, with lookup
//! by category id and by option value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ConfigCategory, Configuration, ProductOption};

/// Catalog schema from catalog.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    categories: Vec<ConfigCategory>,
}

/// The fixed product option catalog.
///
/// The catalog is embedded in the binary at compile time and validated on
/// load: category ids are unique and kebab-case, every category has at
/// least one option, and option values are unique within a category. The
/// first option of each category is the default selection.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    /// Categories in display/definition order
    categories: Vec<ConfigCategory>,
    /// Fast lookup from category id to index
    lookup: HashMap<String, usize>,
}

impl OptionCatalog {
    /// Loads the option catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse embedded catalog.json")?;

        Self::from_categories(file.categories)
    }

    /// Builds a catalog from a list of categories, validating every entry.
    pub fn from_categories(categories: Vec<ConfigCategory>) -> Result<Self> {
        let mut lookup = HashMap::new();

        for (idx, category) in categories.iter().enumerate() {
            // Re-run construction validation; embedded data is machine
            // written but the invariants are cheap to check once at load
            ConfigCategory::new(
                category.id.clone(),
                category.name.clone(),
                category.options.clone(),
            )
            .with_context(|| format!("Invalid catalog category '{}'", category.id))?;

            if lookup.insert(category.id.clone(), idx).is_some() {
                anyhow::bail!("Duplicate catalog category id '{}'", category.id);
            }
        }

        Ok(Self { categories, lookup })
    }

    /// All categories in catalog definition order.
    #[must_use]
    pub fn categories(&self) -> &[ConfigCategory] {
        &self.categories
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&ConfigCategory> {
        let idx = self.lookup.get(category_id)?;
        self.categories.get(*idx)
    }

    /// Looks up an option by category id and option value.
    #[must_use]
    pub fn option(&self, category_id: &str, value: &str) -> Option<&ProductOption> {
        self.category(category_id)?.option_by_value(value)
    }

    /// Creates the default configuration for this catalog.
    #[must_use]
    pub fn default_configuration(&self) -> Configuration {
        Configuration::default_for(&self.categories)
    }

    /// Applies a selection given as category id and option value.
    ///
    /// This is the path used by the CLI and TUI: both always derive their
    /// choices from catalog data, so a failure here means the caller passed
    /// identifiers the catalog does not know.
    ///
    /// # Errors
    ///
    /// Returns an invalid-selection error if the category id or option
    /// value is not present in the catalog.
    pub fn apply_selection(
        &self,
        configuration: &mut Configuration,
        category_id: &str,
        value: &str,
    ) -> Result<()> {
        let category = self.category(category_id).with_context(|| {
            format!("Invalid selection: unknown category '{category_id}'")
        })?;
        let option = category.option_by_value(value).with_context(|| {
            format!("Invalid selection: category '{category_id}' has no option '{value}'")
        })?;

        configuration.select(category, option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = OptionCatalog::load().unwrap();
        assert_eq!(catalog.categories().len(), 7);

        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["material", "style", "thermometer", "tray", "skewers", "stone", "grids"]
        );
    }

    #[test]
    fn test_category_lookup() {
        let catalog = OptionCatalog::load().unwrap();
        assert_eq!(catalog.category("material").unwrap().name, "Body material");
        assert!(catalog.category("missing").is_none());
    }

    #[test]
    fn test_option_lookup() {
        let catalog = OptionCatalog::load().unwrap();
        assert_eq!(catalog.option("material", "stainless").unwrap().price, 45000);
        assert_eq!(catalog.option("style", "engraving").unwrap().price, 3000);
        assert!(catalog.option("material", "titanium").is_none());
    }

    #[test]
    fn test_every_category_has_options_and_default() {
        let catalog = OptionCatalog::load().unwrap();
        for category in catalog.categories() {
            assert!(!category.options.is_empty());
            assert_eq!(category.default_option(), &category.options[0]);
        }
    }

    #[test]
    fn test_default_configuration_covers_all_categories() {
        let catalog = OptionCatalog::load().unwrap();
        let config = catalog.default_configuration();
        for category in catalog.categories() {
            assert!(config.selection(&category.id).is_some());
        }
    }

    #[test]
    fn test_apply_selection_valid() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        catalog
            .apply_selection(&mut config, "thermometer", "installed")
            .unwrap();
        assert_eq!(config.selection("thermometer").unwrap().price, 1500);
    }

    #[test]
    fn test_apply_selection_unknown_category() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        let err = catalog
            .apply_selection(&mut config, "wheels", "yes")
            .unwrap_err();
        assert!(err.to_string().contains("Invalid selection"));
    }

    #[test]
    fn test_apply_selection_unknown_value() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        assert!(catalog
            .apply_selection(&mut config, "material", "cardboard")
            .is_err());
        // Prior state kept
        assert_eq!(config.selection("material").unwrap().value, "steel");
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let catalog = OptionCatalog::load().unwrap();
        let mut categories = catalog.categories().to_vec();
        categories.push(categories[0].clone());

        assert!(OptionCatalog::from_categories(categories).is_err());
    }
}
