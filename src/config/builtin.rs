//! The site's own configuration value.

use super::SiteConfig;
use std::path::PathBuf;

impl SiteConfig {
    /// The literal configuration of johannkerr.com.
    ///
    /// Used when no `blog.toml` is found and as the value [`load`](super::load)
    /// installs by default.
    pub fn builtin() -> Self {
        Self {
            title: "johann".into(),
            description: "Swift, Ruby on Rails, React, Elixir and Phoenix".into(),
            cover_image: PathBuf::from("img/blo-cover.jpg"),
            logo: PathBuf::from("img/ghost-logo.png"),
            lang: "en".into(),
            site_url: "https://johannkerr.com".into(),
            facebook: Some("https://www.facebook.com/johannkerr".into()),
            twitter: Some("https://twitter.com/johann".into()),
            show_subscribe: false,
            mailchimp_action: None,
            mailchimp_name: None,
            mailchimp_email_field_name: None,
            google_site_verification: Some("GoogleCode".into()),
            footer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let config = SiteConfig::builtin();
        let diag = config.diagnose(None);
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_builtin_values() {
        let config = SiteConfig::builtin();
        assert_eq!(config.title, "johann");
        assert_eq!(config.lang, "en");
        assert_eq!(config.site_url, "https://johannkerr.com");
        assert!(!config.show_subscribe);
        assert!(config.mailchimp().is_none());
    }

    #[test]
    fn test_builtin_required_fields_populated() {
        let config = SiteConfig::builtin();
        for field in SiteConfig::REQUIRED {
            let value = config.get(field.key()).unwrap();
            assert!(!value.is_empty(), "{} is empty", field.as_str());
        }
    }
}
