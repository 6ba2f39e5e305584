//! Order message generation.
//!
//! This module serializes the current configuration and total into the
//! human-readable order summary handed off to the external contact channel.
//! The application never sends anything itself; it only formats the message
//! for a compose link or a text file.

use anyhow::{Context, Result};

use crate::catalog::OptionCatalog;
use crate::models::Configuration;
use crate::pricing;

/// Greeting prefixed to the compose link, not part of the message artifact.
pub const ORDER_GREETING: &str =
    "Hello! I would like to order a bbqp in the following configuration:";

/// Newline encoding understood by Telegram compose links.
const URL_LINE_SEPARATOR: &str = "%0A";

/// A fully built order message.
///
/// The message is a pure function of (catalog, configuration, total,
/// attachment): one line per catalog category in definition order, one
/// total line, and one attachment line when the engraving selection enables
/// a stored attachment. Attachment bytes are never embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    lines: Vec<String>,
}

impl OrderMessage {
    /// Builds the order message from the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid-selection error if the configuration is out of
    /// sync with the catalog (a category without a selection).
    pub fn build(catalog: &OptionCatalog, configuration: &Configuration) -> Result<Self> {
        let total = pricing::total(catalog, configuration)?;

        let mut lines = Vec::with_capacity(catalog.categories().len() + 2);

        // Catalog definition order, so the message reads coherently
        for category in catalog.categories() {
            let selection = configuration.selection(&category.id).with_context(|| {
                format!(
                    "Invalid selection: category '{}' has no selection",
                    category.id
                )
            })?;
            lines.push(format!("- {}: {}", category.name, selection.label));
        }

        lines.push(format!("Estimated price: {}", pricing::format_price(total)));

        if let Some(attachment) = configuration.active_engraving_attachment() {
            lines.push(format!(
                "Engraving artwork: {} (file sent separately in chat)",
                attachment.file_name
            ));
        }

        Ok(Self { lines })
    }

    /// The message lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The message as plain text with `\n` line breaks.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Composes the order handoff link for the contact channel.
    ///
    /// Line breaks are percent-encoded as required by the transport; the
    /// destination accepts the remaining text as-is.
    #[must_use]
    pub fn to_url(&self, contact_url: &str) -> String {
        let body = self.lines.join(URL_LINE_SEPARATOR);
        format!("{contact_url}?text={ORDER_GREETING}{URL_LINE_SEPARATOR}{body}")
    }

    /// Default export file name: `bbqp_order_[date].txt`.
    #[must_use]
    pub fn default_export_file_name() -> String {
        let date = chrono::Local::now().format("%Y-%m-%d");
        format!("bbqp_order_{date}.txt")
    }
}
