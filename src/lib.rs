use anyhow::Result;
use which::which;

pub mod git;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod styles;
pub mod utils;
pub mod vendor;

/// Version string shown by `vend --version`; includes branch/hash in dev builds.
pub const VERSION_DISPLAY: &str = env!("VEND_VERSION_DISPLAY");

/// Verify that the external tools an operation shells out to are on PATH.
pub fn check_dependencies(tools: &[&str]) -> Result<()> {
    let mut missing = Vec::new();

    for tool in tools {
        if which(tool).is_err() {
            missing.push(*tool);
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("Missing required dependencies: {}", missing.join(", "));
    }

    Ok(())
}
