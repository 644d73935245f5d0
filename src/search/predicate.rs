//! Predicate compilation
//!
//! [`build`] turns a [`Criteria`] into a single boolean test over a recipe.
//! The wanted values are normalized once at compile time; each recipe field
//! is normalized at test time, so both sides always go through the same
//! canonicalisation.
//!
//! Stages, all ANDed together:
//!
//! - **text**: the query must be a substring of the recipe's name,
//!   description and ingredient names. Queries shorter than
//!   [`MIN_QUERY_LEN`] characters skip this stage.
//! - **ingredient** / **utensil**: every selected label must be present.
//! - **appliance**: the recipe's single appliance must equal every selected
//!   label, so two different appliance tags can never both match.

use super::criteria::{Category, Criteria};
use super::normalize::normalize;
use crate::recipes::Recipe;

/// Shortest query (in characters) that filters on text
pub const MIN_QUERY_LEN: usize = 3;

/// Compiled search predicate
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    query: Option<String>,
    ingredients: Vec<String>,
    appliances: Vec<String>,
    utensils: Vec<String>,
}

/// Compile criteria with the default minimum query length
#[must_use]
pub fn build(criteria: &Criteria) -> Predicate {
    Predicate::compile(criteria, MIN_QUERY_LEN)
}

impl Predicate {
    /// Compile criteria, skipping the text stage for queries shorter than
    /// `min_query_len` characters
    ///
    /// The query is trimmed first, the same way [`super::SearchEngine::should_search`]
    /// measures it.
    #[must_use]
    pub fn compile(criteria: &Criteria, min_query_len: usize) -> Self {
        let query = normalize(criteria.query.trim());
        let wanted = |category: Category| -> Vec<String> {
            criteria.filters.get(category).iter().map(|l| normalize(l)).collect()
        };

        Self {
            query: (query.chars().count() >= min_query_len).then_some(query),
            ingredients: wanted(Category::Ingredient),
            appliances: wanted(Category::Appliance),
            utensils: wanted(Category::Utensil),
        }
    }

    /// Test a recipe against every stage
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && self.matches_ingredients(recipe)
            && self.matches_appliance(recipe)
            && self.matches_utensils(recipe)
    }

    /// True when the text stage is active
    #[must_use]
    pub const fn filters_text(&self) -> bool {
        self.query.is_some()
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        haystack(recipe).contains(query.as_str())
    }

    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        if self.ingredients.is_empty() {
            return true;
        }
        let names: Vec<String> = recipe.ingredient_names().map(normalize).collect();
        self.ingredients.iter().all(|wanted| names.contains(wanted))
    }

    fn matches_appliance(&self, recipe: &Recipe) -> bool {
        if self.appliances.is_empty() {
            return true;
        }
        let appliance = normalize(&recipe.appliance);
        self.appliances.iter().all(|wanted| *wanted == appliance)
    }

    fn matches_utensils(&self, recipe: &Recipe) -> bool {
        if self.utensils.is_empty() {
            return true;
        }
        let utensils: Vec<String> = recipe.utensils.iter().map(|u| normalize(u)).collect();
        self.utensils.iter().all(|wanted| utensils.contains(wanted))
    }
}

/// Normalized name, description and ingredient names, space separated
#[must_use]
pub fn haystack(recipe: &Recipe) -> String {
    let mut parts = vec![recipe.name.as_str(), recipe.description.as_str()];
    parts.extend(recipe.ingredient_names());
    normalize(&parts.join(" "))
}
