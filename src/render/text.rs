//! Terminal view
//!
//! Writes cards, menus and tag badges to any `io::Write`. Colors come from
//! `colored`, so `colored::control::set_override(false)` (the `--no-color`
//! flag) turns them off globally.

use super::card::{count_label, empty_message, ingredient_rows, time_badge};
use super::error::Result;
use super::traits::{MenuPopulator, RecipeRenderer};
use crate::recipes::Recipe;
use crate::search::Category;
use crate::tags::Tag;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::{self, Write};

const INGREDIENT_COLUMN_WIDTH: usize = 32;

/// How much of each recipe to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Full card: title, time, description, ingredients
    #[default]
    Full,
    /// Count, then one line per recipe: id and name
    Compact,
}

/// Terminal renderer and menu populator
pub struct TextView<W: Write> {
    out: W,
    style: CardStyle,
}

impl TextView<io::Stdout> {
    /// View writing to stdout
    #[must_use]
    pub fn stdout(style: CardStyle) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> TextView<W> {
    #[must_use]
    pub const fn new(out: W, style: CardStyle) -> Self {
        Self { out, style }
    }

    /// Consume the view and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a full card for one recipe
    ///
    /// # Errors
    ///
    /// Returns `RenderError::IoError` if writing fails.
    pub fn write_card(&mut self, recipe: &Recipe) -> Result<()> {
        let title = recipe.name.bold();
        match time_badge(recipe) {
            Some(badge) => writeln!(self.out, "{title}  {}", badge.yellow())?,
            None => writeln!(self.out, "{title}")?,
        }

        writeln!(self.out, "  {}", "RECIPE".dimmed())?;
        if !recipe.description.is_empty() {
            writeln!(self.out, "  {}", recipe.description)?;
        }

        if !recipe.ingredients.is_empty() {
            writeln!(self.out, "  {}", "INGREDIENTS".dimmed())?;
            for row in ingredient_rows(&recipe.ingredients, INGREDIENT_COLUMN_WIDTH) {
                writeln!(self.out, "    {row}")?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> RecipeRenderer for TextView<W> {
    fn render(&mut self, recipes: &[Recipe], query: Option<&str>) -> Result<()> {
        writeln!(self.out, "{}", count_label(recipes.len()).cyan())?;
        if self.style == CardStyle::Full {
            writeln!(self.out)?;
        }

        if recipes.is_empty() {
            writeln!(self.out, "{}", empty_message(query).yellow())?;
            return Ok(());
        }

        for recipe in recipes {
            match self.style {
                CardStyle::Full => self.write_card(recipe)?,
                CardStyle::Compact => writeln!(self.out, "{:>4}  {}", recipe.id, recipe.name)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> MenuPopulator for TextView<W> {
    fn populate(
        &mut self,
        category: Category,
        labels: &[String],
        active: &BTreeSet<String>,
    ) -> Result<()> {
        let items: Vec<String> = labels
            .iter()
            .map(|label| {
                if active.contains(label) {
                    format!("[{label}]").green().bold().to_string()
                } else {
                    label.clone()
                }
            })
            .collect();

        writeln!(
            self.out,
            "{} ({}): {}",
            category.title().bold(),
            labels.len(),
            items.join(", ")
        )?;
        Ok(())
    }

    fn badges(&mut self, tags: &[Tag]) -> Result<()> {
        if tags.is_empty() {
            return Ok(());
        }
        let badges: Vec<String> = tags
            .iter()
            .map(|tag| format!("{} ✕", tag.label).on_yellow().black().to_string())
            .collect();
        writeln!(self.out, "{} {}", "Tags:".bold(), badges.join(" "))?;
        Ok(())
    }
}
