//! Presentation error types
//!
//! None of these stop a browse session: the session logs them and carries
//! on with the rest of the update.

use thiserror::Error;

/// Errors raised by renderers and menu populators
#[derive(Debug, Error)]
pub enum RenderError {
    /// The place the output should go to doesn't exist
    #[error("Render target not found: {0}")]
    MissingTarget(String),

    /// Writing the output failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for presentation operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_message() {
        let err = RenderError::MissingTarget("menu:utensil".to_string());
        assert_eq!(err.to_string(), "Render target not found: menu:utensil");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::IoError(_)));
    }
}
