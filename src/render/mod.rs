//! Presentation layer
//!
//! Backend-agnostic traits for showing search results and filter menus,
//! with a terminal implementation ([`TextView`]) and a recording one
//! ([`RecordingView`]) for tests and custom front ends.

pub mod card;
pub mod error;
pub mod mock;
pub mod output;
pub mod text;
pub mod traits;

pub use error::RenderError;
pub use mock::RecordingView;
pub use output::{MessageLog, OutputWriter, StdoutWriter};
pub use text::{CardStyle, TextView};
pub use traits::{MenuPopulator, RecipeRenderer, View};
