//! Output abstraction for user-facing messages
//!
//! Session feedback ("tag added", "unknown command") goes through an
//! [`OutputWriter`] so the interactive loop can be driven from tests with a
//! [`MessageLog`] instead of a terminal.

use colored::Colorize;
use std::cell::RefCell;

/// Trait for message output
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Info,
}

/// Buffering writer, mostly for tests
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Messages of one level
    #[must_use]
    pub fn of_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for MessageLog {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
    }

    #[test]
    fn test_message_log_keeps_order_and_levels() {
        let log = MessageLog::new();
        log.info("tag added");
        log.error("unknown command");
        log.write("plain");

        let messages = log.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (MessageLevel::Info, "tag added".to_string()));
        assert_eq!(messages[2], (MessageLevel::Normal, "plain".to_string()));
        assert_eq!(log.of_level(MessageLevel::Error), vec!["unknown command"]);
    }
}
