//! Browse session error types

use thiserror::Error;

/// Errors raised while interpreting user input in a browse session
///
/// They are reported to the user; the session keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The command name isn't in the action table
    #[error("Unknown command ':{0}' (type :help for the list)")]
    UnknownCommand(String),

    /// The command was given the wrong arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A category name couldn't be parsed
    #[error("{0}")]
    InvalidCategory(String),

    /// Reading the next line of input failed
    #[error("Input error: {0}")]
    Input(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        assert_eq!(
            ActionError::UnknownCommand("frobnicate".to_string()).to_string(),
            "Unknown command ':frobnicate' (type :help for the list)"
        );
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(
            ActionError::Usage(":add <category> <label>").to_string(),
            "Usage: :add <category> <label>"
        );
    }
}
