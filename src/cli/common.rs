//! Shared CLI error handling and helpers.

use std::fmt;

use crate::catalog::OptionCatalog;
use crate::models::Configuration;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Validation failure (bad selection, bad config value)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

/// Error type for CLI commands.
///
/// Carries a user-facing message and maps to a stable exit code, so shell
/// scripts can distinguish bad input from environment failures.
#[derive(Debug)]
pub enum CliError {
    /// Invalid input or configuration value
    Validation(String),
    /// File system or serialization failure
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a `category=value` selection argument.
pub fn parse_selection(arg: &str) -> CliResult<(&str, &str)> {
    let (category, value) = arg.split_once('=').ok_or_else(|| {
        CliError::validation(format!(
            "Invalid selection '{arg}': expected category=value (e.g., material=stainless)"
        ))
    })?;

    if category.is_empty() || value.is_empty() {
        return Err(CliError::validation(format!(
            "Invalid selection '{arg}': category and value must be non-empty"
        )));
    }

    Ok((category, value))
}

/// Builds a configuration from the defaults plus `category=value` overrides.
pub fn configuration_from_selections(
    catalog: &OptionCatalog,
    selections: &[String],
) -> CliResult<Configuration> {
    let mut configuration = catalog.default_configuration();

    for arg in selections {
        let (category, value) = parse_selection(arg)?;
        catalog
            .apply_selection(&mut configuration, category, value)
            .map_err(|e| CliError::validation(e.to_string()))?;
    }

    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_valid() {
        assert_eq!(
            parse_selection("material=stainless").unwrap(),
            ("material", "stainless")
        );
    }

    #[test]
    fn test_parse_selection_invalid() {
        assert!(parse_selection("material").is_err());
        assert!(parse_selection("=stainless").is_err());
        assert!(parse_selection("material=").is_err());
    }

    #[test]
    fn test_configuration_from_selections() {
        let catalog = OptionCatalog::load().unwrap();
        let config = configuration_from_selections(
            &catalog,
            &["material=stainless".to_string(), "stone=yes".to_string()],
        )
        .unwrap();

        assert_eq!(config.selection("material").unwrap().value, "stainless");
        assert_eq!(config.selection("stone").unwrap().value, "yes");
        // Untouched categories keep defaults
        assert_eq!(config.selection("style").unwrap().value, "basic");
    }

    #[test]
    fn test_configuration_from_selections_unknown_category() {
        let catalog = OptionCatalog::load().unwrap();
        let err =
            configuration_from_selections(&catalog, &["wheels=yes".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }
}
