//! Plain-text card layout
//!
//! Pure formatting helpers shared by the terminal view and the `show`
//! command. Nothing here writes anywhere.

use crate::recipes::{Ingredient, Recipe};

/// Split items into two columns, the left one holding the extra item
#[must_use]
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Preparation time badge, when the time is known and non-zero
#[must_use]
pub fn time_badge(recipe: &Recipe) -> Option<String> {
    recipe.time.filter(|t| *t > 0).map(|t| format!("{t} min"))
}

/// Result count line
#[must_use]
pub fn count_label(count: usize) -> String {
    match count {
        0 => "0 recipes".to_string(),
        1 => "1 recipe".to_string(),
        n => format!("{n} recipes"),
    }
}

/// Message shown when a search returns nothing
#[must_use]
pub fn empty_message(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => format!(
            "No recipe matches \"{query}\". Try \"tarte aux pommes\", \"poisson\", etc."
        ),
        None => "No recipe matches the selected filters.".to_string(),
    }
}

fn ingredient_cell(ingredient: &Ingredient, width: usize) -> String {
    let quantity = ingredient.quantity_label();
    if quantity.is_empty() {
        format!("{:<width$}", ingredient.name)
    } else {
        format!("{:<width$}", format!("{} {}", ingredient.name, quantity))
    }
}

/// Ingredient lines laid out in two columns
#[must_use]
pub fn ingredient_rows(ingredients: &[Ingredient], width: usize) -> Vec<String> {
    let (left, right) = split_columns(ingredients);
    left.iter()
        .enumerate()
        .map(|(i, ingredient)| {
            let mut row = ingredient_cell(ingredient, width);
            if let Some(other) = right.get(i) {
                row.push_str("  ");
                row.push_str(&ingredient_cell(other, width));
            }
            row.trim_end().to_string()
        })
        .collect()
}
