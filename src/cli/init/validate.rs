//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to overwrite an existing config file.
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or pass a different directory.",
            config_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_ok() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("blog.toml")).is_ok());
    }

    #[test]
    fn test_existing_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        fs::write(&path, "title = \"mine\"").unwrap();
        let err = validate_target(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
