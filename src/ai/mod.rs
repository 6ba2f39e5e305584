//! AI chef features: support chat and recipe generation.
//!
//! Thin wrappers around a remote generative-AI text/image API. The
//! configurator core never depends on this module; failures here surface as
//! an inert user-visible message and nothing else in the application is
//! affected. Compiled only with the `ai` cargo feature.

pub mod client;

pub use client::{ChefClient, ChefError, Recipe, RecipeImage};
