//! Recipe loading error types
//!
//! Loading the catalogue is the only step of the program that can fail
//! hard; it happens once, before any browsing starts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a recipe document
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The recipe file could not be read
    #[error("Failed to read recipe file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or doesn't match the schema
    #[error("Invalid recipe document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document declares a schema version this build can't read
    #[error("Unsupported recipe schema version: {0}")]
    UnsupportedVersion(u32),

    /// Two recipes share the same id
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    /// No recipe with the requested id
    #[error("Recipe not found: {0}")]
    NotFound(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RecipeError::UnsupportedVersion(9).to_string(),
            "Unsupported recipe schema version: 9"
        );
        assert_eq!(RecipeError::NotFound(4).to_string(), "Recipe not found: 4");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = RecipeError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
