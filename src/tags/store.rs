//! Tag store implementation

use crate::search::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A selected filter value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub category: Category,
}

impl Tag {
    #[must_use]
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }
}

/// Change notification emitted by a mutation that did something
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    Added(Tag),
    Removed(Tag),
    /// Every tag was removed; holds how many there were
    Cleared(usize),
}

/// Which existing tags make an `add` a no-op
///
/// `Global` suppresses a label already selected in any category;
/// `PerCategory` only one already selected in the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    Global,
    PerCategory,
}

/// Ordered collection of active tags
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    tags: Vec<Tag>,
    policy: DuplicatePolicy,
}

impl TagStore {
    /// Create an empty store with the default (global) duplicate policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given duplicate policy
    #[must_use]
    pub const fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            tags: Vec::new(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Select a label
    ///
    /// Returns `None` without changing anything when a tag with exactly this
    /// label already exists (in any category, or in `category` under
    /// [`DuplicatePolicy::PerCategory`]).
    pub fn add(&mut self, label: &str, category: Category) -> Option<TagEvent> {
        let exists = self.tags.iter().any(|tag| {
            tag.label == label
                && (self.policy == DuplicatePolicy::Global || tag.category == category)
        });
        if exists {
            log::debug!("tag '{label}' already active, ignoring");
            return None;
        }

        let tag = Tag::new(label, category);
        log::debug!("tag added: {category} '{label}'");
        self.tags.push(tag.clone());
        Some(TagEvent::Added(tag))
    }

    /// Deselect the first tag with this label (and category, if given)
    pub fn remove(&mut self, label: &str, category: Option<Category>) -> Option<TagEvent> {
        let index = self
            .tags
            .iter()
            .position(|tag| tag.label == label && category.is_none_or(|c| c == tag.category))?;

        let tag = self.tags.remove(index);
        log::debug!("tag removed: {} '{}'", tag.category, tag.label);
        Some(TagEvent::Removed(tag))
    }

    /// Remove every tag
    pub fn clear(&mut self) -> Option<TagEvent> {
        if self.tags.is_empty() {
            return None;
        }
        let count = self.tags.len();
        self.tags.clear();
        log::debug!("cleared {count} tags");
        Some(TagEvent::Cleared(count))
    }

    /// Active tags in selection order
    #[must_use]
    pub fn list(&self) -> &[Tag] {
        &self.tags
    }

    /// Active labels of one category
    #[must_use]
    pub fn labels(&self, category: Category) -> BTreeSet<String> {
        self.tags
            .iter()
            .filter(|tag| tag.category == category)
            .map(|tag| tag.label.clone())
            .collect()
    }

    /// True when a tag with this label and category is active
    #[must_use]
    pub fn contains(&self, label: &str, category: Category) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.label == label && tag.category == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
