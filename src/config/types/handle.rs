//! Process-wide site configuration.
//!
//! Installed once, before any reader exists, and never replaced. Readers get a
//! `&'static SiteConfig` and need no synchronization.

use super::ConfigError;
use crate::config::SiteConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Validate `config` and install it as the process-wide value.
///
/// Fails with [`ConfigError::AlreadyInitialized`] if a value is already
/// installed; the installed value is never replaced. Warnings are left to the
/// caller, which has usually printed them while loading.
pub fn init_config(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    config
        .diagnose(None)
        .into_result()
        .map_err(ConfigError::Diagnostics)?;
    install(config)
}

/// Return the process-wide configuration.
///
/// When nothing was installed yet, the built-in instance is validated and
/// installed.
pub fn load() -> Result<&'static SiteConfig, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let builtin = SiteConfig::builtin();
    builtin.validate()?;
    // A concurrent first caller may have won; both values are valid.
    Ok(CONFIG.get_or_init(|| builtin))
}

/// The installed configuration, if any.
#[inline]
pub fn cfg() -> Option<&'static SiteConfig> {
    CONFIG.get()
}

fn install(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the handle is process-global and tests share the process.
    #[test]
    fn test_load_then_reinit() {
        let first = load().unwrap();
        assert_eq!(first.title, "johann");
        assert!(std::ptr::eq(first, load().unwrap()));
        assert!(std::ptr::eq(first, cfg().unwrap()));

        let err = init_config(SiteConfig::builtin()).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));
    }

    #[test]
    fn test_init_rejects_invalid_before_install() {
        let mut config = SiteConfig::builtin();
        config.title.clear();
        let err = init_config(config).unwrap_err();
        assert!(err.diagnostics().is_some());
    }
}
