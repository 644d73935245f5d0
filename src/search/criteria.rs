//! Search criteria
//!
//! A [`Criteria`] bundles the text query with the selected tag labels of
//! each category. It is rebuilt from scratch for every search, either with
//! the builder or by collecting the current session state with
//! [`Criteria::collect`].

use crate::tags::Tag;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Filter category of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ingredient,
    Appliance,
    Utensil,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Self; 3] = [Self::Ingredient, Self::Appliance, Self::Utensil];

    /// Singular lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Appliance => "appliance",
            Self::Utensil => "utensil",
        }
    }

    /// Menu title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ingredient => "Ingredients",
            Self::Appliance => "Appliances",
            Self::Utensil => "Utensils",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" | "ingredient" | "ingredients" => Ok(Self::Ingredient),
            "a" | "appliance" | "appliances" => Ok(Self::Appliance),
            "u" | "utensil" | "utensils" | "ustensil" | "ustensils" => Ok(Self::Utensil),
            other => Err(format!(
                "Unknown category '{other}' (expected ingredient, appliance or utensil)"
            )),
        }
    }
}

/// Read `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Selected labels per category
///
/// Labels are stored as selected; normalization happens at comparison time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    #[serde(deserialize_with = "null_as_default")]
    pub ingredient: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub appliance: BTreeSet<String>,
    #[serde(alias = "ustensil", deserialize_with = "null_as_default")]
    pub utensil: BTreeSet<String>,
}

impl Filters {
    /// Labels selected for one category
    #[must_use]
    pub const fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Ingredient => &self.ingredient,
            Category::Appliance => &self.appliance,
            Category::Utensil => &self.utensil,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Ingredient => &mut self.ingredient,
            Category::Appliance => &mut self.appliance,
            Category::Utensil => &mut self.utensil,
        }
    }

    /// Select a label
    pub fn insert(&mut self, category: Category, label: impl Into<String>) {
        self.get_mut(category).insert(label.into());
    }

    /// True when no category has a selected label
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

/// Text query plus tag filters for one search
///
/// Missing or `null` fields deserialize to their defaults, so
/// `{"query": "tarte"}` is a valid criteria document with empty filter sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Filters,
}

impl Criteria {
    /// Create empty criteria (matches everything)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a criteria builder
    #[must_use]
    pub fn builder() -> CriteriaBuilder {
        CriteriaBuilder::default()
    }

    /// Gather the current query and active tags into criteria
    ///
    /// The raw query is trimmed, as typed input usually carries stray
    /// whitespace.
    #[must_use]
    pub fn collect<'a>(query: &str, tags: impl IntoIterator<Item = &'a Tag>) -> Self {
        let mut filters = Filters::default();
        for tag in tags {
            filters.insert(tag.category, tag.label.clone());
        }
        Self {
            query: query.trim().to_string(),
            filters,
        }
    }

    /// Parse criteria from a JSON document
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the document is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when at least one tag filter is set
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Merge another criteria into this one
    ///
    /// Filter sets are unioned; `other`'s query wins when it is non-empty.
    pub fn merge(&mut self, other: &Self) {
        for category in Category::ALL {
            for label in other.filters.get(category) {
                self.filters.insert(category, label.clone());
            }
        }
        if !other.query.trim().is_empty() {
            self.query.clone_from(&other.query);
        }
    }
}

/// Builder for [`Criteria`]
#[derive(Debug, Clone, Default)]
pub struct CriteriaBuilder {
    query: String,
    filters: Filters,
}

impl CriteriaBuilder {
    /// Set the text query
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Select an ingredient label
    #[must_use]
    pub fn ingredient(self, label: impl Into<String>) -> Self {
        self.filter(Category::Ingredient, label)
    }

    /// Select an appliance label
    #[must_use]
    pub fn appliance(self, label: impl Into<String>) -> Self {
        self.filter(Category::Appliance, label)
    }

    /// Select a utensil label
    #[must_use]
    pub fn utensil(self, label: impl Into<String>) -> Self {
        self.filter(Category::Utensil, label)
    }

    /// Select a label in any category
    #[must_use]
    pub fn filter(mut self, category: Category, label: impl Into<String>) -> Self {
        self.filters.insert(category, label);
        self
    }

    #[must_use]
    pub fn build(self) -> Criteria {
        Criteria {
            query: self.query,
            filters: self.filters,
        }
    }
}
