//! Browse session
//!
//! The session owns everything that changes while a user browses: the
//! query, the active tags and the last results. Each change that matters
//! runs one update cycle:
//!
//! ```text
//! action ─→ Criteria::collect ─→ SearchEngine::run ─┬─→ render(results)
//!                                                   └─→ derive_lists ─→ populate menus, badges
//! ```
//!
//! A missing render target is logged and skipped; the rest of the cycle
//! still runs.

use super::actions::{ActionResult, BrowseAction, help_text};
use crate::recipes::Recipe;
use crate::render::View;
use crate::search::{Category, Criteria, FilterLists, SearchEngine, derive_lists};
use crate::tags::{DuplicatePolicy, Tag, TagEvent, TagStore};

/// Stateful browse session over a recipe collection
pub struct BrowseSession<'a, V: View> {
    recipes: &'a [Recipe],
    engine: SearchEngine,
    tags: TagStore,
    query: String,
    results: Vec<Recipe>,
    lists: FilterLists,
    cycles: usize,
    view: V,
}

impl<'a, V: View> BrowseSession<'a, V> {
    /// Create a new builder for constructing a `BrowseSession`
    #[must_use]
    pub fn builder(recipes: &'a [Recipe], view: V) -> BrowseSessionBuilder<'a, V> {
        BrowseSessionBuilder::new(recipes, view)
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: BrowseAction) -> ActionResult {
        match action {
            BrowseAction::Query(query) => self.set_query(&query),
            BrowseAction::AddTag(tag) => self.add_tag(&tag.label, tag.category),
            BrowseAction::RemoveTag { label, category } => self.remove_tag(&label, category),
            BrowseAction::ClearTags => self.clear_tags(),
            BrowseAction::Refresh => ActionResult::Refresh(self.refresh()),
            BrowseAction::Help => ActionResult::Message(help_text()),
            BrowseAction::Quit => ActionResult::Exit,
        }
    }

    /// Replace the query and update
    ///
    /// A 1–2 character query with no active tags shows the whole collection.
    pub fn set_query(&mut self, query: &str) -> ActionResult {
        self.query = query.trim().to_string();
        ActionResult::Refresh(self.refresh())
    }

    /// Select a tag; updates only if the tag was actually added
    pub fn add_tag(&mut self, label: &str, category: Category) -> ActionResult {
        let event = self.tags.add(label, category);
        self.on_tag_event(event)
    }

    /// Remove a tag; updates only if one was removed
    pub fn remove_tag(&mut self, label: &str, category: Option<Category>) -> ActionResult {
        let event = self.tags.remove(label, category);
        if event.is_none() {
            return ActionResult::Message(format!("No active tag '{label}'"));
        }
        self.on_tag_event(event)
    }

    /// Remove every tag; updates only if there were any
    pub fn clear_tags(&mut self) -> ActionResult {
        let event = self.tags.clear();
        self.on_tag_event(event)
    }

    fn on_tag_event(&mut self, event: Option<TagEvent>) -> ActionResult {
        match event {
            Some(event) => {
                log::trace!("tag event: {event:?}");
                ActionResult::Refresh(self.refresh())
            }
            None => ActionResult::Continue,
        }
    }

    /// Run one search → render → derive → populate cycle
    ///
    /// Returns the number of results.
    pub fn refresh(&mut self) -> usize {
        let criteria = Criteria::collect(&self.query, self.tags.list());
        let outcome = self.engine.run(self.recipes, &criteria);
        self.results = outcome.results;
        self.cycles += 1;

        let query = (!self.query.is_empty()).then_some(self.query.as_str());
        if let Err(e) = self.view.render(&self.results, query) {
            log::warn!("skipping result rendering: {e}");
        }

        self.lists = derive_lists(&self.results);
        for category in Category::ALL {
            let active = self.tags.labels(category);
            if let Err(e) = self.view.populate(category, self.lists.get(category), &active) {
                log::warn!("skipping {category} menu: {e}");
            }
        }
        if let Err(e) = self.view.badges(self.tags.list()) {
            log::warn!("skipping tag badges: {e}");
        }

        self.results.len()
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active tags
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.list()
    }

    /// Results of the last cycle
    #[must_use]
    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Menu lists of the last cycle
    #[must_use]
    pub const fn lists(&self) -> &FilterLists {
        &self.lists
    }

    /// Number of update cycles run so far
    #[must_use]
    pub const fn cycles(&self) -> usize {
        self.cycles
    }

    /// The view the session draws on
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Consume the session and return its view
    pub fn into_view(self) -> V {
        self.view
    }
}

/// Builder for `BrowseSession`
pub struct BrowseSessionBuilder<'a, V: View> {
    recipes: &'a [Recipe],
    view: V,
    engine: SearchEngine,
    policy: DuplicatePolicy,
    query: String,
    tags: Vec<Tag>,
}

impl<'a, V: View> BrowseSessionBuilder<'a, V> {
    #[must_use]
    pub fn new(recipes: &'a [Recipe], view: V) -> Self {
        Self {
            recipes,
            view,
            engine: SearchEngine::default(),
            policy: DuplicatePolicy::default(),
            query: String::new(),
            tags: Vec::new(),
        }
    }

    /// Shortest query that filters on text
    #[must_use]
    pub const fn min_query_len(mut self, len: usize) -> Self {
        self.engine = SearchEngine::new(len);
        self
    }

    /// How duplicate tag labels are detected
    #[must_use]
    pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Query to start with
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Tag to start with
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Build the session; no cycle runs until the first action or `refresh`
    #[must_use]
    pub fn build(self) -> BrowseSession<'a, V> {
        let mut tags = TagStore::with_policy(self.policy);
        for tag in self.tags {
            tags.add(&tag.label, tag.category);
        }

        BrowseSession {
            recipes: self.recipes,
            engine: self.engine,
            tags,
            query: self.query.trim().to_string(),
            results: Vec::new(),
            lists: FilterLists::default(),
            cycles: 0,
            view: self.view,
        }
    }
}
