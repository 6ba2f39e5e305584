//! Data models for the product catalog and the session configuration.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and CLI logic.

pub mod configuration;
pub mod product_option;

// Re-export all model types
pub use configuration::{Configuration, EngravingAttachment};
pub use product_option::{ConfigCategory, ProductOption};
