//! Session configuration state: one selected option per category.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ConfigCategory, ProductOption};

/// Category id whose selection enables the engraving attachment.
pub const STYLE_CATEGORY_ID: &str = "style";

/// Option value that makes an engraving attachment meaningful.
pub const ENGRAVING_OPTION_VALUE: &str = "engraving";

/// Reference to a user-supplied engraving artwork file.
///
/// Only the file name is recorded; the bytes stay with the user and are
/// delivered through a separate channel after the order handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngravingAttachment {
    /// File name as picked by the user (e.g., "logo.png")
    pub file_name: String,
}

/// The user's current selection across all categories.
///
/// Created once per session with the default (first) option of every
/// category, mutated one category at a time through [`Configuration::select`],
/// and discarded when the session ends. Never persisted.
///
/// # Invariants
///
/// - Every catalog category id has exactly one entry.
/// - Each selected option is a member of its category's option list
///   (checked precondition on `select`, not caller discipline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Selected option per category id
    selections: HashMap<String, ProductOption>,
    /// Optional engraving artwork reference
    engraving: Option<EngravingAttachment>,
}

impl Configuration {
    /// Creates the default configuration: the first option of every category.
    #[must_use]
    pub fn default_for(categories: &[ConfigCategory]) -> Self {
        let selections = categories
            .iter()
            .map(|c| (c.id.clone(), c.default_option().clone()))
            .collect();

        Self {
            selections,
            engraving: None,
        }
    }

    /// Replaces the selection for one category.
    ///
    /// All other categories' selections are unchanged. The option must be a
    /// member of the given category's option list; an invalid selection is
    /// rejected and the prior state is kept.
    ///
    /// # Errors
    ///
    /// Returns an invalid-selection error if the option does not belong to
    /// the category.
    pub fn select(&mut self, category: &ConfigCategory, option: &ProductOption) -> Result<()> {
        if !category.contains(option) {
            anyhow::bail!(
                "Invalid selection: option '{}' does not belong to category '{}'",
                option.value,
                category.id
            );
        }

        self.selections
            .insert(category.id.clone(), option.clone());
        Ok(())
    }

    /// Returns the current selection for a category, if the category is known.
    #[must_use]
    pub fn selection(&self, category_id: &str) -> Option<&ProductOption> {
        self.selections.get(category_id)
    }

    /// Stores an engraving artwork reference.
    ///
    /// Has no effect on price. The attachment is semantically inert unless
    /// the style category is selected to the engraving option.
    pub fn attach_engraving_file(&mut self, file_name: impl Into<String>) {
        self.engraving = Some(EngravingAttachment {
            file_name: file_name.into(),
        });
    }

    /// Clears the engraving artwork reference.
    pub fn clear_engraving_file(&mut self) {
        self.engraving = None;
    }

    /// Returns the stored engraving attachment, if any.
    #[must_use]
    pub fn engraving_attachment(&self) -> Option<&EngravingAttachment> {
        self.engraving.as_ref()
    }

    /// Returns true if the style selection makes an attachment meaningful.
    #[must_use]
    pub fn engraving_selected(&self) -> bool {
        self.selection(STYLE_CATEGORY_ID)
            .is_some_and(|o| o.value == ENGRAVING_OPTION_VALUE)
    }

    /// Returns the attachment only when the engraving selection enables it.
    ///
    /// This is the cross-field invariant: an attachment stored while another
    /// style is selected is ignored, not an error.
    #[must_use]
    pub fn active_engraving_attachment(&self) -> Option<&EngravingAttachment> {
        if self.engraving_selected() {
            self.engraving.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<ConfigCategory> {
        vec![
            ConfigCategory::new(
                "material",
                "Body material",
                vec![
                    ProductOption {
                        label: "Steel 09G2S (3mm)".to_string(),
                        price: 25000,
                        value: "steel".to_string(),
                    },
                    ProductOption {
                        label: "Stainless steel (3mm)".to_string(),
                        price: 45000,
                        value: "stainless".to_string(),
                    },
                ],
            )
            .unwrap(),
            ConfigCategory::new(
                "style",
                "Style & finish",
                vec![
                    ProductOption {
                        label: "Black matt".to_string(),
                        price: 0,
                        value: "basic".to_string(),
                    },
                    ProductOption {
                        label: "Custom engraving".to_string(),
                        price: 3000,
                        value: "engraving".to_string(),
                    },
                ],
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_default_for_selects_first_options() {
        let cats = categories();
        let config = Configuration::default_for(&cats);

        assert_eq!(config.selection("material").unwrap().value, "steel");
        assert_eq!(config.selection("style").unwrap().value, "basic");
        assert!(config.engraving_attachment().is_none());
    }

    #[test]
    fn test_select_replaces_only_named_category() {
        let cats = categories();
        let mut config = Configuration::default_for(&cats);

        let stainless = cats[0].option_by_value("stainless").unwrap().clone();
        config.select(&cats[0], &stainless).unwrap();

        assert_eq!(config.selection("material").unwrap().value, "stainless");
        // Selection isolation: style untouched
        assert_eq!(config.selection("style").unwrap().value, "basic");
    }

    #[test]
    fn test_select_is_idempotent() {
        let cats = categories();
        let mut config = Configuration::default_for(&cats);

        let current = config.selection("material").unwrap().clone();
        config.select(&cats[0], &current).unwrap();

        assert_eq!(config.selection("material").unwrap(), &current);
    }

    #[test]
    fn test_select_rejects_foreign_option() {
        let cats = categories();
        let mut config = Configuration::default_for(&cats);

        // An option from the style category is not valid for material
        let foreign = cats[1].options[1].clone();
        assert!(config.select(&cats[0], &foreign).is_err());

        // Prior state kept
        assert_eq!(config.selection("material").unwrap().value, "steel");
    }

    #[test]
    fn test_attachment_inert_without_engraving_style() {
        let cats = categories();
        let mut config = Configuration::default_for(&cats);

        config.attach_engraving_file("logo.png");
        assert!(config.engraving_attachment().is_some());
        assert!(config.active_engraving_attachment().is_none());

        let engraving = cats[1].option_by_value("engraving").unwrap().clone();
        config.select(&cats[1], &engraving).unwrap();
        assert_eq!(
            config.active_engraving_attachment().unwrap().file_name,
            "logo.png"
        );
    }

    #[test]
    fn test_clear_engraving_file() {
        let cats = categories();
        let mut config = Configuration::default_for(&cats);

        config.attach_engraving_file("logo.png");
        config.clear_engraving_file();
        assert!(config.engraving_attachment().is_none());
    }
}
