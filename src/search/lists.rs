//! Filter menu contents
//!
//! Menus only offer labels that are still reachable from the current
//! result set, so picking a tag also narrows the other menus.

use super::collate::sort_labels;
use super::criteria::Category;
use crate::recipes::Recipe;
use serde::Serialize;
use std::collections::HashSet;

/// Distinct, sorted labels of a result set, one list per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterLists {
    pub ingredients: Vec<String>,
    pub appliances: Vec<String>,
    pub utensils: Vec<String>,
}

impl FilterLists {
    /// Labels of one category
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Ingredient => &self.ingredients,
            Category::Appliance => &self.appliances,
            Category::Utensil => &self.utensils,
        }
    }

    /// True when every list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.appliances.is_empty() && self.utensils.is_empty()
    }
}

/// Drop empty labels and exact duplicates, then sort with French collation
#[must_use]
pub fn unique_sorted<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = labels
        .into_iter()
        .filter(|label| !label.is_empty() && seen.insert(*label))
        .map(ToString::to_string)
        .collect();
    sort_labels(&mut unique);
    unique
}

/// Compute the three menu lists for a result set
#[must_use]
pub fn derive_lists(results: &[Recipe]) -> FilterLists {
    FilterLists {
        ingredients: unique_sorted(results.iter().flat_map(Recipe::ingredient_names)),
        appliances: unique_sorted(results.iter().map(|r| r.appliance.as_str())),
        utensils: unique_sorted(
            results
                .iter()
                .flat_map(|r| r.utensils.iter().map(String::as_str)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::Ingredient;
    use crate::testing::sample_recipes;

    #[test]
    fn test_unique_sorted_exact_dedup() {
        let labels = unique_sorted(["Lait", "beurre", "Œuf", "oeuf", "Lait", ""]);
        assert_eq!(labels, vec!["beurre", "Lait", "oeuf", "Œuf"]);
    }

    #[test]
    fn test_case_variants_are_distinct_labels() {
        let labels = unique_sorted(["Saladier", "saladier"]);
        assert_eq!(labels, vec!["saladier", "Saladier"]);
    }

    #[test]
    fn test_derive_lists_flattens_and_dedups() {
        let lists = derive_lists(&sample_recipes());

        assert_eq!(lists.appliances, vec!["Blender", "Four", "Mixer", "Poêle"]);
        assert!(lists.ingredients.contains(&"Beurre".to_string()));
        assert_eq!(
            lists.ingredients.iter().filter(|l| *l == "Beurre").count(),
            1
        );
        assert!(lists.utensils.contains(&"saladier".to_string()));
    }

    #[test]
    fn test_derive_lists_skips_missing_appliance() {
        let recipes = vec![
            Recipe::new(1, "Salade").with_ingredient(Ingredient::new("Laitue")),
            Recipe::new(2, "Gâteau").with_appliance("Four"),
        ];
        let lists = derive_lists(&recipes);
        assert_eq!(lists.appliances, vec!["Four"]);
        assert_eq!(lists.ingredients, vec!["Laitue"]);
        assert!(lists.utensils.is_empty());
    }

    #[test]
    fn test_derive_lists_of_nothing() {
        assert!(derive_lists(&[]).is_empty());
    }
}
