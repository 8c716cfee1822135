//! CLI output implementation that writes directly to stdout/stderr.

use super::{Output, OutputConfig};
use crate::styles::{self, colors_enabled, colors_enabled_stderr};

/// Git-like output format:
/// - `step()` → verbose only, dim
/// - `result()` → primary output, always shown (unless quiet)
/// - `warning()` → `eprintln!("warning: {msg}")`
/// - `error()` → `eprintln!("error: {msg}")`
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
}

impl CliOutput {
    /// Create a new CLI output with the given configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl Output for CliOutput {
    fn info(&mut self, msg: &str) {
        if !self.config.quiet {
            println!("{msg}");
        }
    }

    fn warning(&mut self, msg: &str) {
        // Warnings are always shown (not affected by quiet mode)
        // Git-like format: lowercase prefix
        if colors_enabled_stderr() {
            eprintln!("{}warning:{} {msg}", styles::YELLOW, styles::RESET);
        } else {
            eprintln!("warning: {msg}");
        }
    }

    fn error(&mut self, msg: &str) {
        // Errors are always shown (not affected by quiet mode)
        // Git-like format: lowercase prefix
        if colors_enabled_stderr() {
            eprintln!("{}error:{} {msg}", styles::RED, styles::RESET);
        } else {
            eprintln!("error: {msg}");
        }
    }

    fn step(&mut self, msg: &str) {
        // Steps are only shown in verbose mode
        if self.config.verbose && !self.config.quiet {
            if colors_enabled() {
                println!("{}{msg}{}", styles::DIM, styles::RESET);
            } else {
                println!("{msg}");
            }
        }
    }

    fn result(&mut self, msg: &str) {
        // Result is the primary output - always shown unless quiet
        if !self.config.quiet {
            if colors_enabled() {
                println!("{}{msg}{}", styles::BOLD, styles::RESET);
            } else {
                println!("{msg}");
            }
        }
    }

    fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}
