//! Search execution
//!
//! The engine applies a compiled [`Predicate`] to the whole collection in
//! one stable pass. The collection is never filtered in place; every call
//! returns a fresh vector in source order.
//!
//! [`SearchEngine::should_search`] gates when a search runs at all: an
//! empty query (reset), a query of at least `min_query_len` characters, or
//! any active tag. For a 1–2 character query with no tags, callers show the
//! full collection instead.

use super::criteria::Criteria;
use super::predicate::{MIN_QUERY_LEN, Predicate};
use crate::recipes::Recipe;
use std::time::Instant;

/// Filter `recipes` with the default minimum query length
#[must_use]
pub fn search(recipes: &[Recipe], criteria: &Criteria) -> Vec<Recipe> {
    SearchEngine::default().search(recipes, criteria)
}

/// Result of one triggered search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching recipes, in source order
    pub results: Vec<Recipe>,
    /// False when the gate skipped filtering and returned everything
    pub filtered: bool,
}

/// Search engine configured with a minimum query length
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    min_query_len: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(MIN_QUERY_LEN)
    }
}

impl SearchEngine {
    #[must_use]
    pub const fn new(min_query_len: usize) -> Self {
        Self { min_query_len }
    }

    #[must_use]
    pub const fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Apply the criteria to every recipe, keeping source order
    #[must_use]
    pub fn search(&self, recipes: &[Recipe], criteria: &Criteria) -> Vec<Recipe> {
        let start = Instant::now();
        let predicate = Predicate::compile(criteria, self.min_query_len);
        let results: Vec<Recipe> = recipes
            .iter()
            .filter(|recipe| predicate.matches(recipe))
            .cloned()
            .collect();

        log::debug!(
            "{} of {} recipes matched in {:.2} ms",
            results.len(),
            recipes.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        results
    }

    /// Whether a change to `query` should trigger a search
    ///
    /// The query is trimmed and measured in characters.
    #[must_use]
    pub fn should_search(&self, query: &str, has_active_tags: bool) -> bool {
        let len = query.trim().chars().count();
        len == 0 || len >= self.min_query_len || has_active_tags
    }

    /// Run the gate, then either search or return the full collection
    #[must_use]
    pub fn run(&self, recipes: &[Recipe], criteria: &Criteria) -> SearchOutcome {
        if self.should_search(&criteria.query, criteria.has_filters()) {
            SearchOutcome {
                results: self.search(recipes, criteria),
                filtered: true,
            }
        } else {
            log::trace!("query {:?} below threshold, showing all recipes", criteria.query);
            SearchOutcome {
                results: recipes.to_vec(),
                filtered: false,
            }
        }
    }
}
