//! Console output for command results

use console::style;

/// Receives informational messages meant for the user
pub trait OutputSink {
    /// Report an informational message
    fn info(&mut self, message: &str);
}

/// [`OutputSink`] printing styled lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn info(&mut self, message: &str) {
        println!("{}", style(message).green());
    }
}

/// [`OutputSink`] that keeps messages in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    messages: Vec<String>,
}

impl RecordingOutput {
    /// Create an empty recorder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Messages received so far
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl OutputSink for RecordingOutput {
    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
