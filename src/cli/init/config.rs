//! Configuration file generation.

use anyhow::{Context, Result};
use blogcfg::SiteConfig;
use std::{fs, path::Path};

/// Config file content: the commented template, or the built-in values.
pub fn generate_config(builtin: bool) -> Result<String> {
    if builtin {
        let body = SiteConfig::builtin()
            .to_toml()
            .context("Failed to serialize the built-in configuration")?;
        Ok(format!(
            "# Blog configuration file (blogcfg v{})\n\n{body}",
            env!("CARGO_PKG_VERSION")
        ))
    } else {
        Ok(SiteConfig::config_template())
    }
}

/// Write the config file, creating parent directories as needed.
pub fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config_template() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site/blog.toml");
        write_config(&path, &generate_config(false).unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Blog configuration file"));
        assert!(content.contains("site_url = \"https://example.com\""));
        assert!(SiteConfig::from_path(&path).is_ok());
    }

    #[test]
    fn test_builtin_config_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog.toml");
        write_config(&path, &generate_config(true).unwrap()).unwrap();

        let loaded = SiteConfig::from_path(&path).unwrap();
        assert_eq!(loaded, SiteConfig::builtin());
    }
}
