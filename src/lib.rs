//! Petits plats - recipe search with tag filters
//!
//! This library filters a recipe collection by a free-text query combined
//! with ingredient, appliance and utensil tags, and derives the tag menus
//! that remain reachable from each result set.
//!
//! - [`recipes`]: recipe model and JSON ingestion
//! - [`search`]: criteria, the match predicate, the search gate, menu lists
//! - [`tags`]: the set of active tags
//! - [`render`]: presentation traits and a terminal implementation
//! - [`browse`]: the interactive session tying them together

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod recipes;
pub mod render;
pub mod search;
pub mod tags;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AppError {
    /// Recipe loading error
    #[error("Recipe error: {0}")]
    RecipeError(#[from] recipes::RecipeError),
    /// Presentation error
    #[error("Render error: {0}")]
    RenderError(#[from] render::RenderError),
    /// Browse session error
    #[error("Browse error: {0}")]
    ActionError(#[from] browse::ActionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Malformed JSON input or output
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
