//! Interactive recipe browsing
//!
//! A [`BrowseSession`] holds the query and the active tags; the
//! [`run`] loop feeds it lines from a [`LineSource`]. Typed text changes the
//! query, `:commands` (declared in [`actions::ALL_ACTIONS`]) manage tags.
//!
//! # Examples
//!
//! ```
//! use petits_plats::browse::{BrowseSession, ScriptedInput, run};
//! use petits_plats::recipes::Catalog;
//! use petits_plats::render::{MessageLog, RecordingView};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let mut session = BrowseSession::builder(catalog.recipes(), RecordingView::new()).build();
//! let mut input = ScriptedInput::new(["coco", ":add appliance Blender", ":quit"]);
//! let output = MessageLog::new();
//!
//! run(&mut session, &mut input, &output).unwrap();
//! assert!(session.results().iter().all(|r| r.appliance == "Blender"));
//! ```

pub mod actions;
pub mod error;
pub mod input;
pub mod session;

pub use actions::{ActionResult, BrowseAction, parse_line};
pub use error::ActionError;
pub use input::{LineSource, PromptInput, ScriptedInput};
pub use session::{BrowseSession, BrowseSessionBuilder};

use crate::render::{OutputWriter, View};
use crate::render::card::count_label;

/// Drive a session until the user quits or input runs out
///
/// Runs an initial update cycle first. Invalid commands are reported
/// through `output` and the loop continues.
///
/// # Errors
///
/// Returns `ActionError::Input` if reading input fails.
pub fn run<V: View>(
    session: &mut BrowseSession<'_, V>,
    input: &mut impl LineSource,
    output: &impl OutputWriter,
) -> Result<(), ActionError> {
    session.refresh();

    while let Some(line) = input.next_line()? {
        let action = match parse_line(&line) {
            Ok(action) => action,
            Err(e) => {
                output.error(&e.to_string());
                continue;
            }
        };

        match session.dispatch(action) {
            ActionResult::Continue => {}
            ActionResult::Refresh(count) => output.info(&count_label(count)),
            ActionResult::Message(message) => output.write(&message),
            ActionResult::Exit => break,
        }
    }
    Ok(())
}
