//! Configurable categories and their priced options.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One selectable choice within a category, carrying a price delta.
///
/// Options are immutable and defined at startup by the embedded catalog.
/// Prices are whole rubles; there are no minor units anywhere in the
/// configurator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Display label (e.g., "Stainless steel (3mm)")
    pub label: String,
    /// Price delta in whole rubles (non-negative)
    pub price: u32,
    /// Stable value identifier (e.g., "stainless")
    pub value: String,
}

/// A configurable dimension of the product (e.g., body material).
///
/// # Validation
///
/// - ID must be unique within the catalog
/// - ID format: kebab-case (lowercase, hyphens and digits only)
/// - Name must be non-empty, max 50 characters
/// - Options must be non-empty; the first option is the default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCategory {
    /// Unique identifier in kebab-case (e.g., "material", "thermometer")
    pub id: String,
    /// Display name (e.g., "Body material")
    pub name: String,
    /// Ordered, non-empty list of selectable options
    pub options: Vec<ProductOption>,
}

impl ConfigCategory {
    /// Creates a new category with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty or not in kebab-case format
    /// - Name is empty or exceeds 50 characters
    /// - The option list is empty, or option values collide
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        options: Vec<ProductOption>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        Self::validate_id(&id)?;
        Self::validate_name(&name)?;
        Self::validate_options(&id, &options)?;

        Ok(Self { id, name, options })
    }

    /// The default selection for this category (first option).
    #[must_use]
    pub fn default_option(&self) -> &ProductOption {
        // Non-emptiness is enforced at construction
        &self.options[0]
    }

    /// Looks up an option by its value identifier.
    #[must_use]
    pub fn option_by_value(&self, value: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Returns true if the given option is a member of this category.
    #[must_use]
    pub fn contains(&self, option: &ProductOption) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Validates category ID format (kebab-case).
    pub(crate) fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Category ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Category ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Category ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates category name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Category name cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "Category name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }

    /// Validates the option list: non-empty, unique values.
    fn validate_options(id: &str, options: &[ProductOption]) -> Result<()> {
        if options.is_empty() {
            anyhow::bail!("Category '{id}' must have at least one option");
        }

        for (i, option) in options.iter().enumerate() {
            if option.value.is_empty() {
                anyhow::bail!("Category '{id}' has an option with an empty value identifier");
            }
            if options[..i].iter().any(|o| o.value == option.value) {
                anyhow::bail!(
                    "Category '{id}' has duplicate option value '{}'",
                    option.value
                );
            }
        }

        Ok(())
    }
}
