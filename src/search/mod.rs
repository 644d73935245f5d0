//! Recipe search engine
//!
//! The pipeline for one search:
//!
//! 1. [`Criteria`] gathers the query and the selected tags
//! 2. [`predicate::build`] compiles them into a [`Predicate`]
//! 3. [`SearchEngine`] applies the predicate to the whole collection
//! 4. [`derive_lists`] computes the menu labels still reachable from the results
//!
//! # Examples
//!
//! ```
//! use petits_plats::recipes::{Ingredient, Recipe};
//! use petits_plats::search::{Criteria, derive_lists, search};
//!
//! let recipes = vec![
//!     Recipe::new(1, "Tarte aux pommes")
//!         .with_appliance("Four")
//!         .with_ingredient(Ingredient::new("Pomme")),
//!     Recipe::new(2, "Limonade").with_appliance("Blender"),
//! ];
//!
//! let criteria = Criteria::builder().ingredient("pomme").build();
//! let results = search(&recipes, &criteria);
//! assert_eq!(results.len(), 1);
//! assert_eq!(derive_lists(&results).appliances, vec!["Four"]);
//! ```

pub mod collate;
pub mod criteria;
pub mod engine;
pub mod lists;
pub mod normalize;
pub mod predicate;

pub use criteria::{Category, Criteria, CriteriaBuilder, Filters};
pub use engine::{SearchEngine, SearchOutcome, search};
pub use lists::{FilterLists, derive_lists, unique_sorted};
pub use normalize::normalize;
pub use predicate::{MIN_QUERY_LEN, Predicate};
