use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single file read from a `file://` repository (512 MB)
pub const MAX_REPOSITORY_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
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
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates a single coordinate component before it becomes part of a
/// repository path or URL.
///
/// Rejects empty values, path separators, parent-directory references and
/// URL delimiters.
pub fn validate_path_segment(segment: &str, segment_type: &str) -> Result<()> {
    if segment.is_empty() {
        anyhow::bail!("{} must not be empty", segment_type);
    }

    if segment.contains('/') || segment.contains('\\') {
        anyhow::bail!(
            "Security: {} '{}' contains path separators which are not allowed",
            segment_type,
            segment
        );
    }

    if segment == ".." || segment.contains("..") {
        anyhow::bail!(
            "Security: {} '{}' contains '..' which is not allowed",
            segment_type,
            segment
        );
    }

    if segment.contains('#') || segment.contains('?') {
        anyhow::bail!(
            "Security: {} '{}' contains URL-unsafe characters",
            segment_type,
            segment
        );
    }

    Ok(())
}

/// Reads a file served by a `file://` repository.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// Returns an error if the path is not a regular file or exceeds
/// [`MAX_REPOSITORY_FILE_SIZE`].
pub fn read_repository_file(path: &Path) -> Result<Option<Vec<u8>>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => anyhow::bail!("Failed to read {} metadata: {}", path.display(), e),
    };

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_REPOSITORY_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_REPOSITORY_FILE_SIZE
        );
    }

    let content = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(Some(content))
}
