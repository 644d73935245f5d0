//! Versioned ingestion schema for recipe documents
//!
//! Recipe files come in two shapes: a bare JSON array (schema version 1,
//! the legacy layout) or an object carrying `schema_version` and `recipes`.
//! Field names changed between versions (`ustensils` → `utensils`,
//! `ingredient` → `name`, `prepTime` → `time`); both spellings are resolved
//! here, once, and every absent field is replaced by its default.

use super::error::RecipeError;
use super::types::{Ingredient, Recipe};
use serde::Deserialize;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: std::ops::RangeInclusive<u32> = 1..=2;

/// Version assumed for documents that don't declare one
pub const LEGACY_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Versioned {
        schema_version: u32,
        #[serde(default)]
        recipes: Vec<RawRecipe>,
    },
    Bare(Vec<RawRecipe>),
}

#[derive(Debug, Default, Deserialize)]
struct RawRecipe {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    appliance: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<RawIngredient>>,
    #[serde(default, alias = "ustensils")]
    utensils: Option<Vec<Option<String>>>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default, alias = "prepTime", alias = "prep_time")]
    time: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIngredient {
    #[serde(default, alias = "ingredient")]
    name: Option<String>,
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
}

impl RawIngredient {
    fn into_ingredient(self) -> Option<Ingredient> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return None;
        }
        Some(Ingredient {
            name,
            quantity: self.quantity,
            unit: self.unit.filter(|u| !u.is_empty()),
        })
    }
}

impl RawRecipe {
    fn into_recipe(self, fallback_id: u32) -> Recipe {
        let mut utensils: Vec<String> = Vec::new();
        for utensil in self.utensils.unwrap_or_default().into_iter().flatten() {
            if !utensil.is_empty() && !utensils.contains(&utensil) {
                utensils.push(utensil);
            }
        }

        Recipe {
            id: self.id.unwrap_or(fallback_id),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            appliance: self.appliance.unwrap_or_default(),
            ingredients: self
                .ingredients
                .unwrap_or_default()
                .into_iter()
                .filter_map(RawIngredient::into_ingredient)
                .collect(),
            utensils,
            servings: self.servings,
            time: self.time,
        }
    }
}

/// Parse a recipe document into canonical recipes
///
/// Recipes without an `id` get their 1-based position in the document.
///
/// # Errors
///
/// Returns `RecipeError::Parse` for malformed JSON,
/// `RecipeError::UnsupportedVersion` for an unknown `schema_version`, and
/// `RecipeError::DuplicateId` when two recipes share an id.
pub fn parse_document(json: &str) -> Result<Vec<Recipe>, RecipeError> {
    let (version, raw) = match serde_json::from_str::<RawDocument>(json)? {
        RawDocument::Versioned {
            schema_version,
            recipes,
        } => (schema_version, recipes),
        RawDocument::Bare(recipes) => (LEGACY_VERSION, recipes),
    };

    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(RecipeError::UnsupportedVersion(version));
    }

    let mut recipes = Vec::with_capacity(raw.len());
    for (position, raw_recipe) in (1u32..).zip(raw) {
        let recipe = raw_recipe.into_recipe(position);
        if recipes.iter().any(|r: &Recipe| r.id == recipe.id) {
            return Err(RecipeError::DuplicateId(recipe.id));
        }
        recipes.push(recipe);
    }

    log::debug!("parsed {} recipes (schema v{version})", recipes.len());
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_bare_array() {
        let json = r#"[{
            "id": 1,
            "name": "Limonade de Coco",
            "servings": 1,
            "ingredients": [
                {"ingredient": "Lait de coco", "quantity": 400, "unit": "ml"},
                {"ingredient": "Glaçons"}
            ],
            "time": 10,
            "description": "Mettre les glaçons à votre goût dans le blender",
            "appliance": "Blender",
            "ustensils": ["cuillère à Soupe", "verres"]
        }]"#;

        let recipes = parse_document(json).unwrap();
        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.name, "Limonade de Coco");
        assert_eq!(recipe.appliance, "Blender");
        assert_eq!(recipe.time, Some(10));
        assert_eq!(recipe.utensils, vec!["cuillère à Soupe", "verres"]);
        assert_eq!(recipe.ingredients[0].name, "Lait de coco");
        assert_eq!(recipe.ingredients[0].quantity, Some(400.0));
        assert_eq!(recipe.ingredients[1].unit, None);
    }

    #[test]
    fn test_parse_versioned_document() {
        let json = r#"{
            "schema_version": 2,
            "recipes": [{
                "name": "Tarte aux pommes",
                "ingredients": [{"name": "pomme"}, {"name": "beurre"}],
                "utensils": ["moule à tarte"],
                "prep_time": 50
            }]
        }"#;

        let recipes = parse_document(json).unwrap();
        assert_eq!(recipes[0].id, 1);
        assert_eq!(recipes[0].time, Some(50));
        assert_eq!(recipes[0].ingredient_names().collect::<Vec<_>>(), vec!["pomme", "beurre"]);
        assert_eq!(recipes[0].utensils, vec!["moule à tarte"]);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let recipes = parse_document(r#"[{"name": null}, {}]"#).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "");
        assert_eq!(recipes[0].description, "");
        assert_eq!(recipes[0].appliance, "");
        assert!(recipes[0].ingredients.is_empty());
        assert!(recipes[0].utensils.is_empty());
        assert_eq!(recipes[1].id, 2);
    }

    #[test]
    fn test_blank_ingredients_and_utensils_dropped() {
        let json = r#"[{
            "ingredients": [{"ingredient": ""}, {"quantity": 2}, {"ingredient": "Sucre"}],
            "ustensils": ["", null, "fouet", "fouet"]
        }]"#;

        let recipes = parse_document(json).unwrap();
        assert_eq!(recipes[0].ingredients.len(), 1);
        assert_eq!(recipes[0].ingredients[0].name, "Sucre");
        assert_eq!(recipes[0].utensils, vec!["fouet"]);
    }

    #[test]
    fn test_unsupported_version() {
        let result = parse_document(r#"{"schema_version": 7, "recipes": []}"#);
        assert!(matches!(result, Err(RecipeError::UnsupportedVersion(7))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = parse_document(r#"[{"id": 3}, {"id": 3}]"#);
        assert!(matches!(result, Err(RecipeError::DuplicateId(3))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_document("{not json"), Err(RecipeError::Parse(_))));
    }
}
