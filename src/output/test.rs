//! Test output implementation for verifying command output in tests.
//!
//! This captures all output as structured data for easy assertions.

use super::{Output, OutputConfig};

/// Represents a single output entry captured during testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    /// Informational message (includes streamed command output lines)
    Info(String),
    /// Warning message
    Warning(String),
    /// Error message
    Error(String),
    /// Step message (verbose-only progress)
    Step(String),
    /// Final result message
    Result(String),
}

/// Test output implementation that captures all output for assertions.
///
/// # Example
///
/// ```ignore
/// let mut output = TestOutput::verbose();
/// some_command(&mut output)?;
///
/// assert!(output.has_step("Cloning"));
/// assert!(!output.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct TestOutput {
    config: OutputConfig,
    entries: Vec<OutputEntry>,
}

impl TestOutput {
    /// Create a new test output with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a test output with custom configuration.
    pub fn with_config(config: OutputConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Create a test output in quiet mode.
    pub fn quiet() -> Self {
        Self::with_config(OutputConfig::new(true, false))
    }

    /// Create a test output in verbose mode.
    pub fn verbose() -> Self {
        Self::with_config(OutputConfig::new(false, true))
    }

    /// Get all captured output entries.
    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    /// Clear all captured entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get all info messages.
    pub fn infos(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Info(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get all step messages.
    pub fn steps(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Step(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get all result messages.
    pub fn results(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Result(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get all warning messages.
    pub fn warnings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Warning(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get all error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                OutputEntry::Error(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check if any info message contains the given substring.
    pub fn has_info(&self, substring: &str) -> bool {
        self.infos().iter().any(|s| s.contains(substring))
    }

    /// Check if any step message contains the given substring.
    pub fn has_step(&self, substring: &str) -> bool {
        self.steps().iter().any(|s| s.contains(substring))
    }

    /// Check if any result message contains the given substring.
    pub fn has_result(&self, substring: &str) -> bool {
        self.results().iter().any(|s| s.contains(substring))
    }

    /// Check if any warning message contains the given substring.
    pub fn has_warning(&self, substring: &str) -> bool {
        self.warnings().iter().any(|s| s.contains(substring))
    }

    /// Check if any error message contains the given substring.
    pub fn has_error(&self, substring: &str) -> bool {
        self.errors().iter().any(|s| s.contains(substring))
    }

    /// Check if any errors were output.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Error(_)))
    }

    /// Check if any warnings were output.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Warning(_)))
    }
}

impl Output for TestOutput {
    fn info(&mut self, msg: &str) {
        // Respect quiet mode to match CLI behavior
        if !self.config.quiet {
            self.entries.push(OutputEntry::Info(msg.to_string()));
        }
    }

    fn warning(&mut self, msg: &str) {
        // Warnings are always captured (not affected by quiet mode)
        self.entries.push(OutputEntry::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        // Errors are always captured (not affected by quiet mode)
        self.entries.push(OutputEntry::Error(msg.to_string()));
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose && !self.config.quiet {
            self.entries.push(OutputEntry::Step(msg.to_string()));
        }
    }

    fn result(&mut self, msg: &str) {
        if !self.config.quiet {
            self.entries.push(OutputEntry::Result(msg.to_string()));
        }
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_steps_in_verbose() {
        let mut output = TestOutput::verbose();
        output.step("Cloning repository");
        assert_eq!(output.steps(), vec!["Cloning repository"]);
        assert!(output.has_step("Cloning"));
    }

    #[test]
    fn test_steps_hidden_by_default() {
        let mut output = TestOutput::new();
        output.step("Should not appear");
        assert!(output.steps().is_empty());
    }

    #[test]
    fn test_captures_warnings_and_errors() {
        let mut output = TestOutput::new();
        output.warning("Something is fishy");
        output.error("Something went wrong");

        assert!(output.has_warnings());
        assert!(output.has_errors());
        assert!(output.has_warning("fishy"));
        assert!(output.has_error("wrong"));
    }

    #[test]
    fn test_quiet_mode_suppresses_info() {
        let mut output = TestOutput::quiet();
        output.info("Should not appear");
        output.result("Should not appear either");
        output.warning("Should appear");

        assert!(output.entries().iter().all(|e| matches!(
            e,
            OutputEntry::Warning(_)
        )));
    }

    #[test]
    fn test_captures_result() {
        let mut output = TestOutput::new();
        output.result("Vendored 'lib' into 'vendor/lib'");
        assert!(output.has_result("vendor/lib"));
    }

    #[test]
    fn test_clear() {
        let mut output = TestOutput::new();
        output.info("Message");
        output.clear();
        assert!(output.entries().is_empty());
    }
}
