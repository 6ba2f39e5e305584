//! CLI command handlers for the bbqp configurator.
//!
//! This module provides headless, scriptable access to the configurator's
//! core functionality for automation, testing, and CI integration.

pub mod catalog;
#[cfg(feature = "ai")]
pub mod chef;
pub mod common;
pub mod config;
pub mod order;
pub mod price;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
#[cfg(feature = "ai")]
pub use chef::ChefArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use order::OrderArgs;
pub use price::PriceArgs;
