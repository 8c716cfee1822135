use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Recursively copy a directory tree from `src` to `dst`.
///
/// `dst` must not exist yet; its parent directories are created as needed.
/// Symlinks are followed - the metadata of the link target decides how an
/// entry is copied, so a symlink to a directory is copied as a directory
/// with the target's contents.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        anyhow::bail!("Destination already exists: {}", dst.display());
    }

    fs::create_dir_all(dst)
        .with_context(|| format!("Failed to create directory: {}", dst.display()))?;

    for entry in fs::read_dir(src)
        .with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in: {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // fs::metadata follows symlinks; entry.file_type() would report
        // the link itself and send a symlinked directory to fs::copy.
        if fs::metadata(&src_path)
            .with_context(|| format!("Failed to stat: {}", src_path.display()))?
            .is_dir()
        {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_dir_recursive() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.txt"), "alpha").unwrap();
        fs::write(src.join("nested/b.txt"), "beta").unwrap();

        let dst = temp_dir.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "alpha");
        assert_eq!(
            fs::read_to_string(dst.join("nested/b.txt")).unwrap(),
            "beta"
        );
    }

    #[test]
    fn test_copy_dir_recursive_refuses_existing_destination() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("keep.txt"), "existing").unwrap();

        assert!(copy_dir_recursive(&src, &dst).is_err());
        // Existing content is untouched
        assert_eq!(
            fs::read_to_string(dst.join("keep.txt")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn test_copy_dir_creates_destination_parents() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("f"), "x").unwrap();

        let dst = temp_dir.path().join("deep/nested/dst");
        copy_dir_recursive(&src, &dst).unwrap();
        assert!(dst.join("f").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_dir_follows_directory_symlinks() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("inner.txt"), "linked").unwrap();
        std::os::unix::fs::symlink(&target, src.join("link")).unwrap();

        let dst = temp_dir.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        // Copied as a real directory with the target's contents
        assert!(dst.join("link").is_dir());
        assert!(!dst.join("link").is_symlink());
        assert_eq!(
            fs::read_to_string(dst.join("link/inner.txt")).unwrap(),
            "linked"
        );
    }
}
