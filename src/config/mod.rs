//! Site configuration for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── access     # by-name getter, mailchimp form, social links
//! ├── builtin    # the literal site instance
//! ├── lang       # BCP 47 syntax check
//! ├── validate   # field rules, collected into ConfigDiagnostics
//! ├── types/     # ConfigError, FieldPath, presence, global handle
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Key                          | Required | Purpose                          |
//! |------------------------------|----------|----------------------------------|
//! | `title`, `description`       | yes      | site name and tagline            |
//! | `cover_image`, `logo`        | yes      | relative image paths             |
//! | `lang`                       | yes      | BCP 47 tag                       |
//! | `site_url`                   | yes      | absolute URL, no trailing slash  |
//! | `facebook`, `twitter`        | no       | full profile URLs                |
//! | `show_subscribe`             | yes      | subscription UI toggle           |
//! | `mailchimp_*`                | no       | subscribe form wiring            |
//! | `google_site_verification`   | no       | verification meta tag            |
//! | `footer`                     | no       | extra footer markup              |
//!
//! camelCase spellings (`siteUrl`, `showSubscribe`, ...) are accepted too.

mod access;
mod builtin;
pub mod lang;
mod util;
mod validate;
pub mod types;

pub use access::{FieldValue, MailchimpForm, SocialNetwork};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigPresence, DiagnosticKind, FieldPath,
    cfg, init_config, load,
};
pub use util::{find_config_file, find_config_file_from};

use crate::log;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Blog site configuration, one value per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Site title.
    #[config(required, default = "My Blog", inline_doc)]
    pub title: String,

    /// Short tagline.
    #[config(required, default = "A personal blog", inline_doc)]
    pub description: String,

    /// Cover art, relative to the site root.
    #[serde(alias = "coverImage")]
    #[config(required, default = "img/cover.jpg", inline_doc)]
    pub cover_image: PathBuf,

    /// Logo art, relative to the site root.
    #[config(required, default = "img/logo.png", inline_doc)]
    pub logo: PathBuf,

    /// Specifying a valid BCP 47 language helps screen readers announce text properly.
    /// Examples: "en", "en-US", "zh-Hans".
    #[config(required, default = "en")]
    pub lang: String,

    /// Blog full path, no ending slash.
    #[serde(alias = "siteUrl")]
    #[config(required, default = "https://example.com", inline_doc)]
    pub site_url: String,

    /// Full profile URL, not a username.
    #[serde(
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub facebook: Option<String>,

    /// Full profile URL, not a username.
    #[serde(
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub twitter: Option<String>,

    /// Hide or show all email subscribe boxes.
    #[serde(alias = "showSubscribe")]
    #[config(required, default = "false", inline_doc)]
    pub show_subscribe: bool,

    /// Action URL of the mailchimp embedded signup form.
    #[serde(
        alias = "mailchimpAction",
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub mailchimp_action: Option<String>,

    /// Hidden input field name of the signup form.
    #[serde(
        alias = "mailchimpName",
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub mailchimp_name: Option<String>,

    /// Name and id of the mailchimp email field.
    #[serde(
        alias = "mailchimpEmailFieldName",
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub mailchimp_email_field_name: Option<String>,

    /// Meta tag for Google Webmaster Tools.
    #[serde(
        alias = "googleSiteVerification",
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub google_site_verification: Option<String>,

    /// Appears alongside the footer, after the credits.
    #[serde(
        deserialize_with = "util::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[config(inline_doc)]
    pub footer: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            cover_image: PathBuf::new(),
            logo: PathBuf::new(),
            lang: "en".into(),
            site_url: String::new(),
            facebook: None,
            twitter: None,
            show_subscribe: false,
            mailchimp_action: None,
            mailchimp_name: None,
            mailchimp_email_field_name: None,
            google_site_verification: None,
            footer: None,
        }
    }
}

impl SiteConfig {
    /// Parse configuration from TOML string. No validation.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load, check and validate a config file.
    ///
    /// Unknown keys are logged and ignored. Required keys must be spelled out
    /// in the file, not just defaulted.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let presence = ConfigPresence::from_toml(&content)?;
        let diag = config.diagnose(Some(&presence));
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate an already constructed value.
    ///
    /// Collects all errors at once; warnings are printed, not returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose(None);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Generate a commented `blog.toml`.
    pub fn config_template() -> String {
        let mut out = format!(
            "# Blog configuration file (blogcfg v{})\n\n",
            env!("CARGO_PKG_VERSION")
        );
        out.push_str(&Self::template_with_header());
        out
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Minimal valid config body; `extra` lines are appended.
#[cfg(test)]
pub fn test_config_toml(extra: &str) -> String {
    format!(
        "title = \"Test\"\n\
         description = \"Test blog\"\n\
         cover_image = \"img/cover.jpg\"\n\
         logo = \"img/logo.png\"\n\
         lang = \"en\"\n\
         site_url = \"https://example.com\"\n\
         show_subscribe = false\n\
         {extra}"
    )
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        // Unclosed bracket
        let result = SiteConfig::from_str("[base\ntitle = \"My Blog\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "");
        assert_eq!(config.lang, "en");
        assert!(!config.show_subscribe);
        assert!(config.facebook.is_none());
    }

    #[test]
    fn test_snake_case_keys() {
        let config = SiteConfig::from_str(&test_config_toml("twitter = \"https://twitter.com/t\"")).unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(config.cover_image, PathBuf::from("img/cover.jpg"));
        assert_eq!(config.site_url, "https://example.com");
        assert_eq!(config.twitter.as_deref(), Some("https://twitter.com/t"));
    }

    #[test]
    fn test_camel_case_aliases() {
        let content = "title = \"johann\"\n\
                       coverImage = \"img/blo-cover.jpg\"\n\
                       siteUrl = \"https://johannkerr.com\"\n\
                       showSubscribe = true\n\
                       mailchimpAction = \"https://list-manage.com/subscribe/post\"\n\
                       mailchimpName = \"b_123\"\n\
                       mailchimpEmailFieldName = \"MERGE0\"\n\
                       googleSiteVerification = \"GoogleCode\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.cover_image, PathBuf::from("img/blo-cover.jpg"));
        assert_eq!(config.site_url, "https://johannkerr.com");
        assert!(config.show_subscribe);
        assert_eq!(config.mailchimp_name.as_deref(), Some("b_123"));
        assert_eq!(config.mailchimp_email_field_name.as_deref(), Some("MERGE0"));
        assert_eq!(config.google_site_verification.as_deref(), Some("GoogleCode"));
    }

    #[test]
    fn test_empty_optional_strings_are_none() {
        let config = SiteConfig::from_str(&test_config_toml(
            "mailchimp_action = \"\"\nfooter = \"  \"\nfacebook = \"\"",
        ))
        .unwrap();
        assert!(config.mailchimp_action.is_none());
        assert!(config.footer.is_none());
        assert!(config.facebook.is_none());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = test_config_toml("author = \"johann\"\n[unknown_section]\nfield = 1");
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert_eq!(config.title, "Test");
        assert!(ignored.iter().any(|f| f == "author"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(&test_config_toml("")).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path_valid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, test_config_toml("footer = \"<b>hi</b>\"")).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.footer.as_deref(), Some("<b>hi</b>"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_from_path_missing_required_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        let content = test_config_toml("").replace("show_subscribe = false\n", "");
        fs::write(&path, content).unwrap();

        let err = SiteConfig::from_path(&path).unwrap_err();
        let diag = err.diagnostics().unwrap();
        let missing = diag.error_for(SiteConfig::FIELDS.show_subscribe).unwrap();
        assert_eq!(missing.kind, DiagnosticKind::MissingRequiredField);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_template_parses_and_validates() {
        let template = SiteConfig::config_template();
        assert!(template.contains("title = \"My Blog\""));
        assert!(template.contains("lang = \"en\""));
        assert!(template.contains("show_subscribe = false"));
        assert!(template.contains("# facebook = \"\""));
        assert!(template.contains("# Meta tag for Google Webmaster Tools."));
        assert!(template.contains(
            "# mailchimp_action = \"\"  # Action URL of the mailchimp embedded signup form.\n"
        ));

        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty());
        assert!(config.validate().is_ok());
        assert!(config.facebook.is_none());
    }

    #[test]
    fn test_to_toml_skips_absent_optionals() {
        let mut config = SiteConfig::builtin();
        config.footer = None;
        let out = config.to_toml().unwrap();
        assert!(out.contains("site_url = \"https://johannkerr.com\""));
        assert!(!out.contains("footer"));
        assert_eq!(SiteConfig::from_str(&out).unwrap(), config);
    }
}
