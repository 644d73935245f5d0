//! Recording view for testing
//!
//! Captures everything a session asks it to draw, and can simulate missing
//! targets so the error path of an update cycle can be exercised without a
//! terminal.

use super::error::{RenderError, Result};
use super::traits::{MenuPopulator, RecipeRenderer};
use crate::recipes::Recipe;
use crate::search::Category;
use crate::tags::Tag;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// One call to [`RecipeRenderer::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    /// Ids of the rendered recipes, in order
    pub ids: Vec<u32>,
    pub query: Option<String>,
}

/// Menu state as last populated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub labels: Vec<String>,
    pub active: BTreeSet<String>,
}

/// View that records calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub renders: Vec<RenderCall>,
    pub menus: BTreeMap<Category, MenuState>,
    pub badges: Vec<Tag>,
    /// Simulate a missing card grid
    pub missing_grid: bool,
    /// Simulate missing menus
    pub missing_menus: HashSet<Category>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// View whose card grid is missing
    #[must_use]
    pub fn without_grid() -> Self {
        Self {
            missing_grid: true,
            ..Self::default()
        }
    }

    /// View missing the menu of `category`
    #[must_use]
    pub fn without_menu(category: Category) -> Self {
        Self {
            missing_menus: HashSet::from([category]),
            ..Self::default()
        }
    }

    /// Most recent render call
    #[must_use]
    pub fn last_render(&self) -> Option<&RenderCall> {
        self.renders.last()
    }

    /// Labels currently shown in a menu
    #[must_use]
    pub fn menu_labels(&self, category: Category) -> Vec<&str> {
        self.menus
            .get(&category)
            .map(|menu| menu.labels.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl RecipeRenderer for RecordingView {
    fn render(&mut self, recipes: &[Recipe], query: Option<&str>) -> Result<()> {
        if self.missing_grid {
            return Err(RenderError::MissingTarget("cards".to_string()));
        }
        self.renders.push(RenderCall {
            ids: recipes.iter().map(|r| r.id).collect(),
            query: query.map(ToString::to_string),
        });
        Ok(())
    }
}

impl MenuPopulator for RecordingView {
    fn populate(
        &mut self,
        category: Category,
        labels: &[String],
        active: &BTreeSet<String>,
    ) -> Result<()> {
        if self.missing_menus.contains(&category) {
            return Err(RenderError::MissingTarget(format!("menu:{category}")));
        }
        self.menus.insert(
            category,
            MenuState {
                labels: labels.to_vec(),
                active: active.clone(),
            },
        );
        Ok(())
    }

    fn badges(&mut self, tags: &[Tag]) -> Result<()> {
        self.badges = tags.to_vec();
        Ok(())
    }
}
