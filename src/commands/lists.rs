//! Lists command - print the filter menus reachable from a search

use super::OutputFormat;
use crate::{
    AppError,
    recipes::Catalog,
    render::{MenuPopulator, TextView, CardStyle},
    search::{Category, Criteria, FilterLists, SearchEngine, derive_lists},
};
use std::io::Write;

type Result<T> = std::result::Result<T, AppError>;

/// Execute the lists command
///
/// Labels already selected through the criteria are marked active.
///
/// # Errors
/// Returns an error if writing the output fails
pub fn execute(
    catalog: &Catalog,
    criteria: &Criteria,
    engine: &SearchEngine,
    format: OutputFormat,
    mut out: impl Write,
) -> Result<FilterLists> {
    let outcome = engine.run(catalog.recipes(), criteria);
    let lists = derive_lists(&outcome.results);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &lists)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let mut view = TextView::new(out, CardStyle::Compact);
            for category in Category::ALL {
                view.populate(category, lists.get(category), criteria.filters.get(category))?;
            }
        }
    }
    Ok(lists)
}
