//! bbqp Configurator Library
//!
//! Core functionality for the bbqp grill configurator: the product option
//! catalog, configuration state, price aggregation, and order message
//! building, plus the TUI and headless CLI surfaces on top of them.

// Module declarations
#[cfg(feature = "ai")]
pub mod ai;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod order;
pub mod pricing;
pub mod tui;
