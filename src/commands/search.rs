//! Search command - print the recipes matching a query and tags

use super::OutputFormat;
use crate::{
    AppError,
    recipes::Catalog,
    render::{CardStyle, RecipeRenderer, TextView},
    search::{Criteria, SearchEngine},
};
use std::io::Write;

type Result<T> = std::result::Result<T, AppError>;

/// Execute the search command
///
/// Applies the same length gate as the browse session: a 1–2 character
/// query with no tags prints the whole collection. Returns the number of
/// recipes printed.
///
/// # Errors
/// Returns an error if writing the output fails
pub fn execute(
    catalog: &Catalog,
    criteria: &Criteria,
    engine: &SearchEngine,
    format: OutputFormat,
    style: CardStyle,
    mut out: impl Write,
) -> Result<usize> {
    let outcome = engine.run(catalog.recipes(), criteria);
    let count = outcome.results.len();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &outcome.results)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let query = criteria.query.trim();
            let mut view = TextView::new(out, style);
            view.render(&outcome.results, (!query.is_empty()).then_some(query))?;
        }
    }
    Ok(count)
}
