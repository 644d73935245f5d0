//! Show command - print one recipe card

use super::OutputFormat;
use crate::{
    AppError,
    recipes::Catalog,
    render::{CardStyle, TextView},
};
use std::io::Write;

type Result<T> = std::result::Result<T, AppError>;

/// Execute the show command
///
/// # Errors
/// Returns `RecipeError::NotFound` for an unknown id, or an error if writing fails
pub fn execute(catalog: &Catalog, id: u32, format: OutputFormat, mut out: impl Write) -> Result<()> {
    let recipe = catalog.require(id)?;

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, recipe)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            TextView::new(out, CardStyle::Full).write_card(recipe)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::RecipeError;
    use crate::testing::sample_recipes;

    #[test]
    fn test_show_card() {
        colored::control::set_override(false);
        let catalog = Catalog::new(sample_recipes());
        let mut out = Vec::new();

        execute(&catalog, 2, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Limonade de coco"));
        assert!(text.contains("400ml"));
        assert!(text.contains("10 min"));
    }

    #[test]
    fn test_show_unknown_id() {
        let catalog = Catalog::new(sample_recipes());
        let err = execute(&catalog, 99, OutputFormat::Json, Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::RecipeError(RecipeError::NotFound(99))));
    }
}
