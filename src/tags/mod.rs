//! Active filter tags
//!
//! The [`TagStore`] owns the tags the user has selected. Mutations report
//! what changed as a [`TagEvent`]; a no-op mutation reports nothing, and
//! every reported event is what triggers a new search.

pub mod store;

pub use store::{DuplicatePolicy, Tag, TagEvent, TagStore};
