//! Output abstraction layer for separating IO from business logic.
//!
//! This module provides the `Output` trait that abstracts all output
//! operations, keeping the fetch and build orchestration free of direct
//! `println!` / `eprintln!` calls and making their console output
//! assertable in tests.
//!
//! # Usage
//!
//! Commands should accept `&mut dyn Output` and use its methods:
//!
//! ```ignore
//! pub fn run_with_output(args: Args, output: &mut dyn Output) -> Result<()> {
//!     output.step("Cloning repository...");
//!     output.result("Vendored 'lib' into 'vendor/lib'");
//!     Ok(())
//! }
//! ```

mod cli;
mod test;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

/// Configuration for output behavior.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress most output when true.
    pub quiet: bool,
    /// Enable debug/verbose output when true.
    pub verbose: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Trait for abstracting output operations.
///
/// Implementors should respect `quiet` and `verbose` modes where
/// appropriate: warnings and errors are always shown, steps only in
/// verbose mode, and the final result line whenever not quiet.
pub trait Output {
    /// Display an informational message.
    /// Respects quiet mode. Streamed external command output goes
    /// through here, one line per call.
    fn info(&mut self, msg: &str);

    /// Display a warning message to stderr.
    /// Always shown (not affected by quiet mode).
    fn warning(&mut self, msg: &str);

    /// Display an error message to stderr.
    /// Always shown (not affected by quiet mode).
    fn error(&mut self, msg: &str);

    /// Display an intermediate step message.
    /// Only shown in verbose mode (not in default output).
    /// Use this for step-by-step progress during operations.
    fn step(&mut self, msg: &str);

    /// Display a final result message.
    /// The primary success output shown in default mode.
    /// Use this for the 1-2 line summary at the end of a command.
    fn result(&mut self, msg: &str);

    /// Check if quiet mode is enabled.
    fn is_quiet(&self) -> bool;

    /// Check if verbose mode is enabled.
    fn is_verbose(&self) -> bool;
}
