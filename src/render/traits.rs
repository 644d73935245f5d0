//! Core traits for the presentation layer
//!
//! The search core never draws anything itself. After each search it hands
//! the results to a [`RecipeRenderer`] and the derived labels to a
//! [`MenuPopulator`]; nothing they return feeds back into the search.

use super::error::Result;
use crate::recipes::Recipe;
use crate::search::Category;
use crate::tags::Tag;
use std::collections::BTreeSet;

/// Consumer of filtered results
pub trait RecipeRenderer {
    /// Show one card per recipe plus a result count
    ///
    /// `query` is the text the user searched for, used for the message
    /// shown when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the output target is missing or unwritable.
    fn render(&mut self, recipes: &[Recipe], query: Option<&str>) -> Result<()>;
}

/// Consumer of derived filter lists and active tags
pub trait MenuPopulator {
    /// Rebuild the menu of one category, marking the active labels
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if this menu's target is missing or unwritable.
    fn populate(
        &mut self,
        category: Category,
        labels: &[String],
        active: &BTreeSet<String>,
    ) -> Result<()>;

    /// Show the active tags as removable badges
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the badge area is missing or unwritable.
    fn badges(&mut self, _tags: &[Tag]) -> Result<()> {
        Ok(())
    }
}

/// Everything a browse session draws on
pub trait View: RecipeRenderer + MenuPopulator {}

impl<T: RecipeRenderer + MenuPopulator> View for T {}
