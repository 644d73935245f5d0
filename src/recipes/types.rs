//! Recipe data structures
//!
//! These are the canonical, fully-defaulted records the rest of the crate
//! works with. Raw documents are converted into them by [`super::schema`],
//! so nothing downstream has to deal with missing fields or legacy names.

use serde::Serialize;

/// A single ingredient line of a recipe
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ingredient {
    /// Ingredient label, e.g. "Lait de coco"
    pub name: String,
    /// Amount, if the recipe gives one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of the amount ("ml", "grammes", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without quantity or unit
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Set the quantity
    #[must_use]
    pub const fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the unit
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Quantity and unit as displayed on a card
    ///
    /// The unit is glued to the quantity (`"400ml"`), shown alone when there
    /// is no quantity, and the label is empty when neither is known.
    #[must_use]
    pub fn quantity_label(&self) -> String {
        let unit = self.unit.as_deref().unwrap_or("");
        match self.quantity {
            Some(quantity) => format!("{quantity}{unit}"),
            None => unit.trim().to_string(),
        }
    }
}

/// An immutable recipe record
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Single appliance, empty when the recipe names none
    pub appliance: String,
    pub ingredients: Vec<Ingredient>,
    /// Utensils in first-seen order, case as stored, no exact duplicates
    pub utensils: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
}

impl Recipe {
    /// Create an empty recipe with the given id and name
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            appliance: String::new(),
            ingredients: Vec::new(),
            utensils: Vec::new(),
            servings: None,
            time: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_appliance(mut self, appliance: impl Into<String>) -> Self {
        self.appliance = appliance.into();
        self
    }

    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add a utensil, ignoring exact duplicates
    #[must_use]
    pub fn with_utensil(mut self, utensil: impl Into<String>) -> Self {
        let utensil = utensil.into();
        if !self.utensils.contains(&utensil) {
            self.utensils.push(utensil);
        }
        self
    }

    #[must_use]
    pub const fn with_time(mut self, minutes: u32) -> Self {
        self.time = Some(minutes);
        self
    }

    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Iterate over ingredient names
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}
