use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "identifiers record file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::RecordFileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is a symbolic link. For security reasons, symbolic links are not allowed.",
                file_description
            ),
            hint: "Pass the path of the file the link points to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that an existing output path is not a symbolic link
///
/// A path that does not exist yet passes.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}
