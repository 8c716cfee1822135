use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Thin wrapper around invocations of the `git` binary.
///
/// Every operation shells out, captures output, and surfaces the child's
/// stderr in the error message on non-zero exit. Git's internal behavior
/// is never interpreted beyond exit code and text output.
pub struct GitCommand {
    quiet: bool,
}

impl GitCommand {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Clone a repository's default branch into `target_dir`.
    pub fn clone(&self, repo_url: &str, target_dir: &Path) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.arg("clone");

        if self.quiet {
            cmd.arg("--quiet");
        }

        cmd.arg(repo_url).arg(target_dir);

        let output = cmd
            .output()
            .context("Failed to execute git clone command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git clone failed: {}", stderr);
        }

        Ok(())
    }

    /// Clone only the history reachable from a single tag or branch.
    ///
    /// Uses `--branch <ref> --single-branch --depth 1`, so the clone is
    /// already positioned at the requested ref and no separate checkout
    /// is needed.
    pub fn clone_at_ref(&self, repo_url: &str, reference: &str, target_dir: &Path) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["clone", "--branch", reference, "--single-branch", "--depth", "1"]);

        if self.quiet {
            cmd.arg("--quiet");
        }

        cmd.arg(repo_url).arg(target_dir);

        let output = cmd
            .output()
            .context("Failed to execute git clone command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git clone failed: {}", stderr);
        }

        Ok(())
    }

    /// Check out a tag, branch, or commit inside an existing clone.
    pub fn checkout_in(&self, repo_dir: &Path, reference: &str) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.arg("checkout");

        if self.quiet {
            cmd.arg("--quiet");
        }

        cmd.arg(reference).current_dir(repo_dir);

        let output = cmd
            .output()
            .context("Failed to execute git checkout command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git checkout failed: {}", stderr);
        }

        Ok(())
    }

    /// Apply a patch file to the working tree of an existing clone.
    pub fn apply_patch_in(&self, repo_dir: &Path, patch_file: &Path) -> Result<()> {
        let output = Command::new("git")
            .arg("apply")
            .arg(patch_file)
            .current_dir(repo_dir)
            .output()
            .context("Failed to execute git apply command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git apply failed: {}", stderr);
        }

        Ok(())
    }
}
