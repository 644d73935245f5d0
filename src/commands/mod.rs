//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and writes its output to the given writer.

pub mod browse;
pub mod completions;
pub mod config;
pub mod lists;
pub mod search;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use lists::execute as lists;
pub use search::execute as search;
pub use show::execute as show;

/// Output format for non-interactive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored text for a terminal
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}
