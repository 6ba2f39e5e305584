//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the order handoff defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "bbqp Configurator";

/// Default contact URL for order handoff (Telegram compose link).
pub const DEFAULT_CONTACT_URL: &str = "https://t.me/thetaranov";

/// Currency marker appended to formatted prices (rubles, no minor units).
pub const CURRENCY_MARKER: &str = "₽";
