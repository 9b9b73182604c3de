use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum BOM file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Operation name used in error messages (e.g. "read", "write")
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Returns the file size so callers can apply [`validate_file_size`].
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
