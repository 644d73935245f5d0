//! Recipe catalogue
//!
//! The catalogue is the static, ordered collection every search runs
//! against. It is loaded once (from a file or from the data set embedded
//! in the binary) and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use petits_plats::recipes::Catalog;
//!
//! let catalog = Catalog::from_json(r#"[{"id": 1, "name": "Tarte aux pommes"}]"#).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.get(1).map(|r| r.name.as_str()), Some("Tarte aux pommes"));
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::RecipeError;
pub use types::{Ingredient, Recipe};

use std::fs;
use std::path::Path;

/// Recipe data set shipped with the binary
pub const EMBEDDED_RECIPES: &str = include_str!("../../data/recipes.json");

/// The immutable recipe collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalogue from already-canonical recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a catalogue from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `RecipeError` if the document can't be parsed (see
    /// [`schema::parse_document`]).
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        schema::parse_document(json).map(Self::new)
    }

    /// Load a catalogue from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Io` if the file can't be read, or a parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        log::info!("loaded {} recipes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The data set compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `RecipeError` if the embedded document is invalid.
    pub fn embedded() -> Result<Self, RecipeError> {
        Self::from_json(EMBEDDED_RECIPES)
    }

    /// Load from `path` when given, otherwise use the embedded data set
    ///
    /// # Errors
    ///
    /// Returns `RecipeError` if loading fails.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, RecipeError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// All recipes, in source order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Find a recipe by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Find a recipe by id, failing with `RecipeError::NotFound`
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has this id.
    pub fn require(&self, id: u32) -> Result<&Recipe, RecipeError> {
        self.get(id).ok_or(RecipeError::NotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_data_set_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.recipes().iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 7, "name": "Crêpes"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.require(7).unwrap().name, "Crêpes");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("definitely/not/here.json");
        assert!(matches!(result, Err(RecipeError::Io { .. })));
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::new(vec![Recipe::new(1, "Soupe")]);
        assert!(matches!(catalog.require(2), Err(RecipeError::NotFound(2))));
    }

    #[test]
    fn test_load_or_embedded_without_path() {
        let catalog = Catalog::load_or_embedded(None).unwrap();
        assert_eq!(catalog.len(), Catalog::embedded().unwrap().len());
    }
}
