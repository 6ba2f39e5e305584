//! Price aggregation over the current configuration.
//!
//! The total is recomputed freshly from the configuration on every call.
//! There is no cached total anywhere in the application, so the displayed
//! price can never diverge from the selection state.

use anyhow::{Context, Result};

use crate::catalog::OptionCatalog;
use crate::constants::CURRENCY_MARKER;
use crate::models::Configuration;

/// Computes the total price: the sum of every category's selected option
/// price, across all catalog categories.
///
/// Free options contribute 0 like any other price; there is no special
/// casing. The result is always a non-negative integer.
///
/// # Errors
///
/// Returns an invalid-selection error if a catalog category has no entry in
/// the configuration. This cannot happen for configurations created through
/// [`OptionCatalog::default_configuration`], but an out-of-sync pair is
/// reported instead of guessed at.
pub fn total(catalog: &OptionCatalog, configuration: &Configuration) -> Result<u32> {
    let mut sum: u32 = 0;

    for category in catalog.categories() {
        let selection = configuration.selection(&category.id).with_context(|| {
            format!(
                "Invalid selection: category '{}' has no selection",
                category.id
            )
        })?;
        sum += selection.price;
    }

    Ok(sum)
}

/// Formats a price as an integer followed by the currency marker.
#[must_use]
pub fn format_price(price: u32) -> String {
    format!("{price} {CURRENCY_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_total() {
        let catalog = OptionCatalog::load().unwrap();
        let config = catalog.default_configuration();

        // steel 25000 + all other defaults free
        assert_eq!(total(&catalog, &config).unwrap(), 25000);
    }

    #[test]
    fn test_stainless_with_thermometer_total() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        catalog
            .apply_selection(&mut config, "material", "stainless")
            .unwrap();
        catalog
            .apply_selection(&mut config, "thermometer", "installed")
            .unwrap();

        assert_eq!(total(&catalog, &config).unwrap(), 46500);
    }

    #[test]
    fn test_most_expensive_everything_total() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        for (category, value) in [
            ("material", "stainless"),
            ("style", "military"),
            ("thermometer", "installed"),
            ("tray", "drawer"),
            ("skewers", "10pcs"),
            ("stone", "yes"),
            ("grids", "yes"),
        ] {
            catalog.apply_selection(&mut config, category, value).unwrap();
        }

        assert_eq!(total(&catalog, &config).unwrap(), 64500);
    }

    #[test]
    fn test_total_matches_sum_of_selections() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();
        catalog
            .apply_selection(&mut config, "skewers", "6pcs")
            .unwrap();

        let expected: u32 = catalog
            .categories()
            .iter()
            .map(|c| config.selection(&c.id).unwrap().price)
            .sum();
        assert_eq!(total(&catalog, &config).unwrap(), expected);
    }

    #[test]
    fn test_reselect_leaves_total_unchanged() {
        let catalog = OptionCatalog::load().unwrap();
        let mut config = catalog.default_configuration();

        let before = total(&catalog, &config).unwrap();
        catalog
            .apply_selection(&mut config, "material", "steel")
            .unwrap();
        assert_eq!(total(&catalog, &config).unwrap(), before);
    }

    #[test]
    fn test_missing_category_is_invalid_selection() {
        let catalog = OptionCatalog::load().unwrap();
        // A configuration built for an empty catalog is out of sync with the
        // real one
        let config = Configuration::default_for(&[]);

        let err = total(&catalog, &config).unwrap_err();
        assert!(err.to_string().contains("Invalid selection"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(46500), "46500 ₽");
        assert_eq!(format_price(0), "0 ₽");
    }
}
