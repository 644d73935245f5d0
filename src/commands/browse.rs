//! Browse command - interactive search session

use crate::{
    AppError,
    browse::{self, BrowseSession, LineSource, PromptInput},
    config::AppConfig,
    recipes::Catalog,
    render::{OutputWriter, StdoutWriter, TextView, View, CardStyle},
};

type Result<T> = std::result::Result<T, AppError>;

/// Execute the browse command on the terminal
///
/// # Errors
/// Returns an error if reading from the terminal fails
pub fn execute(catalog: &Catalog, config: &AppConfig, query: Option<&str>, quiet: bool) -> Result<()> {
    let view = TextView::stdout(CardStyle::Full);
    run_with(
        catalog,
        config,
        query,
        quiet,
        view,
        &mut PromptInput::default(),
        &StdoutWriter::new(),
    )
}

/// Run a session with explicit view and input
///
/// # Errors
/// Returns an error if reading input fails
pub fn run_with<V: View>(
    catalog: &Catalog,
    config: &AppConfig,
    query: Option<&str>,
    quiet: bool,
    view: V,
    input: &mut impl LineSource,
    output: &impl OutputWriter,
) -> Result<()> {
    let mut session = BrowseSession::builder(catalog.recipes(), view)
        .min_query_len(config.min_query_len)
        .duplicate_policy(config.duplicate_policy)
        .query(query.unwrap_or_default())
        .build();

    if !quiet {
        output.info(&format!(
            "{} recipes loaded. Type to search, :help for commands.",
            catalog.len()
        ));
    }

    browse::run(&mut session, input, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::ScriptedInput;
    use crate::render::{MessageLog, RecordingView};
    use crate::render::output::MessageLevel;
    use crate::testing::sample_recipes;

    #[test]
    fn test_run_with_config() {
        let catalog = Catalog::new(sample_recipes());
        let config = AppConfig {
            min_query_len: 2,
            ..AppConfig::default()
        };
        let mut input = ScriptedInput::new(["ta", ":quit"]);
        let output = MessageLog::new();

        run_with(&catalog, &config, None, false, RecordingView::new(), &mut input, &output).unwrap();

        let info = output.of_level(MessageLevel::Info);
        assert!(info[0].starts_with("5 recipes loaded"));
        assert_eq!(info[1], "2 recipes");
    }

    #[test]
    fn test_initial_query_and_quiet() {
        let catalog = Catalog::new(sample_recipes());
        let output = MessageLog::new();

        run_with(
            &catalog,
            &AppConfig::default(),
            Some("coco"),
            true,
            RecordingView::new(),
            &mut ScriptedInput::default(),
            &output,
        )
        .unwrap();

        assert!(output.messages().is_empty());
    }
}
