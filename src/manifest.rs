//! `vend.toml` manifest parsing for `vend sync`.
//!
//! The manifest is a flat list of fetch entries, run in the order written.
//! There is no dependency resolution and no per-entry build configuration.
//!
//! # Example
//!
//! ```toml
//! [[dependency]]
//! url = "https://github.com/MADEAPPS/newton-dynamics.git"
//! subfolder = "newton-4.00"
//! dest = "external/newton-4.00"
//! tag = "v4.02"
//! ```

use crate::vendor::FetchRequest;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "vend.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencyEntry>,
}

/// One vendored dependency.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyEntry {
    pub url: String,
    pub subfolder: String,
    pub dest: PathBuf,
    pub tag: Option<String>,
    pub patch: Option<PathBuf>,
    /// Use a full clone plus explicit checkout instead of a clone-time
    /// tag filter.
    #[serde(default)]
    pub checkout: bool,
}

impl DependencyEntry {
    pub fn to_request(&self) -> FetchRequest {
        FetchRequest {
            url: self.url.clone(),
            subfolder: self.subfolder.clone(),
            dest: self.dest.clone(),
            tag: self.tag.clone(),
            patch: self.patch.clone(),
            explicit_checkout: self.checkout,
        }
    }

    /// Short human-readable label used in progress and error reporting.
    pub fn label(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} @ {tag}", self.subfolder),
            None => self.subfolder.clone(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let manifest: Manifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[dependency]]
            url = "https://example/repo.git"
            subfolder = "lib"
            dest = "vendor/lib"
            tag = "v1.0"
            patch = "patches/fix.patch"
            checkout = true
            "#,
        )
        .unwrap();

        assert_eq!(manifest.dependencies.len(), 1);
        let entry = &manifest.dependencies[0];
        assert_eq!(entry.url, "https://example/repo.git");
        assert_eq!(entry.tag.as_deref(), Some("v1.0"));
        assert!(entry.checkout);

        let req = entry.to_request();
        assert!(req.explicit_checkout);
        assert_eq!(req.dest, PathBuf::from("vendor/lib"));
    }

    #[test]
    fn test_parse_minimal_entry() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[dependency]]
            url = "https://example/repo.git"
            subfolder = "lib"
            dest = "vendor/lib"
            "#,
        )
        .unwrap();

        let entry = &manifest.dependencies[0];
        assert!(entry.tag.is_none());
        assert!(entry.patch.is_none());
        assert!(!entry.checkout);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = toml::from_str("").unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Manifest, _> = toml::from_str(
            r#"
            [[dependency]]
            url = "https://example/repo.git"
            subfolder = "lib"
            dest = "vendor/lib"
            branch = "main"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_label() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[dependency]]
            url = "u"
            subfolder = "lib"
            dest = "vendor/lib"
            tag = "v2"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.dependencies[0].label(), "lib @ v2");
    }
}
