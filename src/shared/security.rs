use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a workspace YAML file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

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

/// Validates that a path is an existing, non-symlinked directory
pub fn validate_directory(path: &Path, description: &str) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("{} does not exist: {}", description, path.display());
    }

    validate_not_symlink(path, "open")?;

    if !path.is_dir() {
        anyhow::bail!("{} is not a directory: {}", description, path.display());
    }

    Ok(())
}

/// Reads a regular file after rejecting symlinks and oversized files
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file (e.g., "opencontrol.yaml") for error messages
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("component.yaml");
        fs::write(&file_path, "name: test").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/component.yaml");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "open").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_directory_success() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory(temp_dir.path(), "Workspace").is_ok());
    }

    #[test]
    fn test_validate_directory_missing() {
        let err = validate_directory(Path::new("/nonexistent/workspace"), "Workspace").unwrap_err();
        assert!(err.to_string().contains("Workspace does not exist"));
    }

    #[test]
    fn test_validate_directory_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("opencontrol.yaml");
        fs::write(&file_path, "components: []").unwrap();

        let err = validate_directory(&file_path, "Workspace").unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("component.yaml");
        fs::write(&file_path, "name: Web").unwrap();

        let content = read_regular_file(&file_path, "component.yaml").unwrap();
        assert_eq!(content, "name: Web");
    }

    #[test]
    fn test_read_regular_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "component.yaml").unwrap_err();
        assert!(err.to_string().contains("is not a regular file"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("opencontrol.yaml");
        assert!(validate_file_size(1024, &path, 2048).is_ok());
        assert!(validate_file_size(2048, &path, 2048).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("opencontrol.yaml");
        let err = validate_file_size(4096, &path, 2048).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
