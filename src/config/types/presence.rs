//! Tracks which keys a config file actually spelled out.
//!
//! `#[serde(default)]` hides the difference between `show_subscribe = false`
//! and a missing `show_subscribe`; required-field checks need to see it.

use rustc_hash::FxHashSet;

/// Set of dot-separated TOML paths present in the raw file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(content)?;
        let mut presence = Self::default();
        presence.collect_value("", &value);
        Ok(presence)
    }

    /// Check whether a field path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    /// Check a field under either of its spellings.
    pub fn contains_any<S: AsRef<str>>(&self, paths: &[S]) -> bool {
        paths.iter().any(|path| self.contains(path.as_ref()))
    }

    fn collect_value(&mut self, prefix: &str, value: &toml::Value) {
        if !prefix.is_empty() {
            self.paths.insert(prefix.to_string());
        }
        if let toml::Value::Table(table) = value {
            for (key, child) in table {
                let next = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                self.collect_value(&next, child);
            }
        }
    }
}
