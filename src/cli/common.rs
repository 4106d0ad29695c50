//! Resolving which configuration a command works on.

use super::Cli;
use anyhow::Result;
use blogcfg::{SiteConfig, config::find_config_file, debug, log};
use std::path::PathBuf;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => f.write_str("built-in configuration"),
        }
    }
}

/// Pick the config source for this invocation.
///
/// `--builtin` wins; otherwise the config file is searched upward from cwd,
/// falling back to the built-in instance when none exists.
pub fn resolve_source(cli: &Cli) -> ConfigSource {
    if cli.builtin {
        return ConfigSource::Builtin;
    }
    match find_config_file(&cli.config) {
        Some(path) => ConfigSource::File(path),
        None => {
            log!("hint"; "'{}' not found, using the built-in configuration", cli.config.display());
            ConfigSource::Builtin
        }
    }
}

/// Load (and validate) the configuration from `source`.
pub fn load_from(source: &ConfigSource) -> Result<SiteConfig> {
    debug!("config"; "loading {}", source);
    let config = match source {
        ConfigSource::File(path) => SiteConfig::from_path(path)?,
        ConfigSource::Builtin => {
            let config = SiteConfig::builtin();
            config.validate()?;
            config
        }
    };
    Ok(config)
}
