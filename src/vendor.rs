//! The vendor-fetch operation: clone an upstream repository, optionally
//! patch it, and copy one subfolder into the local tree.
//!
//! The temporary clone lives in a [`tempfile::TempDir`], so it is removed
//! on every exit path - success, any error, or panic - without explicit
//! cleanup code.

use crate::git::GitCommand;
use crate::output::Output;
use crate::utils::copy_dir_recursive;
use std::path::PathBuf;
use tempfile::TempDir;
use thiserror::Error;

/// A single vendor-fetch request. Transient - consumed by
/// [`fetch_subfolder`] and discarded.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Source repository URL (anything `git clone` accepts).
    pub url: String,
    /// Name of the subfolder inside the repository to vendor.
    pub subfolder: String,
    /// Local path the subfolder is copied to. Must not exist yet.
    pub dest: PathBuf,
    /// Tag or branch to vendor. `None` means the remote's default branch.
    pub tag: Option<String>,
    /// Patch file applied to the clone before extraction.
    pub patch: Option<PathBuf>,
    /// Force a full clone followed by `git checkout <tag>` instead of a
    /// clone-time `--branch` filter. Needed when the ref is a commit hash,
    /// which `git clone --branch` does not accept.
    pub explicit_checkout: bool,
}

/// How the requested ref is reached in branch/tag terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneStrategy {
    /// `git clone --branch <ref> --single-branch --depth 1`.
    TagFilter(String),
    /// Full clone, then `git checkout <ref>` inside the clone.
    ExplicitCheckout(String),
    /// Plain clone of the default branch.
    DefaultBranch,
}

impl FetchRequest {
    pub fn clone_strategy(&self) -> CloneStrategy {
        match (&self.tag, self.explicit_checkout) {
            (Some(tag), false) => CloneStrategy::TagFilter(tag.clone()),
            (Some(tag), true) => CloneStrategy::ExplicitCheckout(tag.clone()),
            (None, _) => CloneStrategy::DefaultBranch,
        }
    }
}

/// Why a vendor-fetch failed.
///
/// Callers branch on the variant; only the CLI layer turns these into
/// console text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("destination '{}' already exists", dest.display())]
    DestinationExists { dest: PathBuf },

    #[error("subfolder '{subfolder}' not found in the repository")]
    SubfolderNotFound { subfolder: String },

    #[error("patch failed to apply: {detail}")]
    PatchFailed { detail: String },

    #[error("{action} failed: {detail}")]
    CommandFailed { action: &'static str, detail: String },

    #[error("filesystem error: {detail}")]
    Io { detail: String },
}

/// Run one vendor-fetch: clone, optionally check out and patch, verify the
/// subfolder, copy it to the destination.
///
/// On success `req.dest` contains exactly the subfolder's contents at the
/// requested ref. On any failure the destination is left untouched. The
/// temporary clone is removed in both cases.
pub fn fetch_subfolder(
    req: &FetchRequest,
    git: &GitCommand,
    output: &mut dyn Output,
) -> Result<(), FetchError> {
    // Fail before any network work: a pre-existing destination is never
    // merged or overwritten.
    if req.dest.exists() {
        return Err(FetchError::DestinationExists {
            dest: req.dest.clone(),
        });
    }

    let temp_dir = TempDir::new().map_err(|e| FetchError::Io {
        detail: e.to_string(),
    })?;
    let clone_dir = temp_dir.path().join("repo");

    match req.clone_strategy() {
        CloneStrategy::TagFilter(tag) => {
            output.step(&format!("Cloning '{}' at '{tag}'...", req.url));
            git.clone_at_ref(&req.url, &tag, &clone_dir)
                .map_err(|e| FetchError::CommandFailed {
                    action: "clone",
                    detail: format!("{e:#}"),
                })?;
        }
        CloneStrategy::ExplicitCheckout(tag) => {
            output.step(&format!("Cloning '{}'...", req.url));
            git.clone(&req.url, &clone_dir)
                .map_err(|e| FetchError::CommandFailed {
                    action: "clone",
                    detail: format!("{e:#}"),
                })?;
            output.step(&format!("Checking out '{tag}'..."));
            git.checkout_in(&clone_dir, &tag)
                .map_err(|e| FetchError::CommandFailed {
                    action: "checkout",
                    detail: format!("{e:#}"),
                })?;
        }
        CloneStrategy::DefaultBranch => {
            output.step(&format!("Cloning '{}'...", req.url));
            git.clone(&req.url, &clone_dir)
                .map_err(|e| FetchError::CommandFailed {
                    action: "clone",
                    detail: format!("{e:#}"),
                })?;
        }
    }

    if let Some(patch) = &req.patch {
        // The patch path is relative to the caller's working directory,
        // but git apply runs inside the clone.
        let patch_abs = patch.canonicalize().map_err(|e| FetchError::PatchFailed {
            detail: format!("cannot resolve patch file '{}': {e}", patch.display()),
        })?;
        output.step(&format!("Applying patch '{}'...", patch.display()));
        git.apply_patch_in(&clone_dir, &patch_abs)
            .map_err(|e| FetchError::PatchFailed {
                detail: format!("{e:#}"),
            })?;
    }

    let src_path = clone_dir.join(&req.subfolder);
    if !src_path.is_dir() {
        return Err(FetchError::SubfolderNotFound {
            subfolder: req.subfolder.clone(),
        });
    }

    output.step(&format!(
        "Copying '{}' to '{}'...",
        req.subfolder,
        req.dest.display()
    ));
    copy_dir_recursive(&src_path, &req.dest).map_err(|e| FetchError::Io {
        detail: format!("{e:#}"),
    })?;

    // Drop would clean up silently; close() surfaces removal problems.
    if let Err(e) = temp_dir.close() {
        output.warning(&format!("could not remove temporary clone: {e}"));
    }

    Ok(())
}
