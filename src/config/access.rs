//! Read access for downstream consumers: by-name lookup and the feature
//! views (subscribe form, social links) derived from field presence.

use super::SiteConfig;
use std::fmt;
use std::path::Path;

/// A field value borrowed from [`SiteConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Path(&'a Path),
    Bool(bool),
    /// Optional field that is not configured.
    Unset,
}

impl FieldValue<'_> {
    /// Blank text or path, or unset. A bool is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Path(p) => p.to_string_lossy().trim().is_empty(),
            Self::Bool(_) => false,
            Self::Unset => true,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unset => Ok(()),
        }
    }
}

/// Subscribe form wiring; only exists when all three fields are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailchimpForm<'a> {
    /// Form `action`, the POST target.
    pub action: &'a str,
    /// Name of the hidden anti-bot input.
    pub hidden_field: &'a str,
    /// `name` and `id` of the email input.
    pub email_field: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    Twitter,
}

impl SocialNetwork {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
        }
    }
}

impl SiteConfig {
    /// Look up a field by name, snake_case or camelCase.
    ///
    /// Returns `None` for names that are not config fields.
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        use FieldValue::{Bool, Path, Text};

        let value = match name {
            "title" => Text(&self.title),
            "description" => Text(&self.description),
            "cover_image" | "coverImage" => Path(&self.cover_image),
            "logo" => Path(&self.logo),
            "lang" => Text(&self.lang),
            "site_url" | "siteUrl" => Text(&self.site_url),
            "facebook" => optional(&self.facebook),
            "twitter" => optional(&self.twitter),
            "show_subscribe" | "showSubscribe" => Bool(self.show_subscribe),
            "mailchimp_action" | "mailchimpAction" => optional(&self.mailchimp_action),
            "mailchimp_name" | "mailchimpName" => optional(&self.mailchimp_name),
            "mailchimp_email_field_name" | "mailchimpEmailFieldName" => {
                optional(&self.mailchimp_email_field_name)
            }
            "google_site_verification" | "googleSiteVerification" => {
                optional(&self.google_site_verification)
            }
            "footer" => optional(&self.footer),
            _ => return None,
        };
        Some(value)
    }

    /// Mailchimp wiring, when action, hidden field and email field are all set.
    pub fn mailchimp(&self) -> Option<MailchimpForm<'_>> {
        Some(MailchimpForm {
            action: self.mailchimp_action.as_deref()?,
            hidden_field: self.mailchimp_name.as_deref()?,
            email_field: self.mailchimp_email_field_name.as_deref()?,
        })
    }

    /// The subscribe form to render, if subscription UI is enabled and wired.
    pub fn subscribe_form(&self) -> Option<MailchimpForm<'_>> {
        if self.show_subscribe {
            self.mailchimp()
        } else {
            None
        }
    }

    /// Configured social profile links, in display order.
    pub fn social_links(&self) -> impl Iterator<Item = (SocialNetwork, &str)> {
        [
            (SocialNetwork::Facebook, self.facebook.as_deref()),
            (SocialNetwork::Twitter, self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| Some((network, url?)))
    }

    /// Absolute URL of a site-relative path.
    ///
    /// ```ignore
    /// config.url_for("img/blo-cover.jpg") // "https://johannkerr.com/img/blo-cover.jpg"
    /// ```
    pub fn url_for(&self, path: impl AsRef<Path>) -> String {
        let path = path.as_ref().to_string_lossy();
        let path = path.trim_start_matches('/');
        let base = self.site_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

#[inline]
fn optional(value: &Option<String>) -> FieldValue<'_> {
    value.as_deref().map_or(FieldValue::Unset, FieldValue::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate::to_camel_case;
    use std::path::PathBuf;

    fn wired() -> SiteConfig {
        SiteConfig {
            show_subscribe: true,
            mailchimp_action: Some("https://x.us1.list-manage.com/subscribe/post".into()),
            mailchimp_name: Some("b_123_456".into()),
            mailchimp_email_field_name: Some("MERGE0".into()),
            ..SiteConfig::builtin()
        }
    }

    #[test]
    fn test_get_by_name() {
        let config = SiteConfig::builtin();
        assert_eq!(config.get("title"), Some(FieldValue::Text("johann")));
        assert_eq!(config.get("siteUrl"), config.get("site_url"));
        assert_eq!(config.get("show_subscribe"), Some(FieldValue::Bool(false)));
        assert_eq!(config.get("footer"), Some(FieldValue::Unset));
        assert_eq!(config.get("author"), None);
        assert_eq!(
            config.get("coverImage").unwrap().to_string(),
            "img/blo-cover.jpg"
        );
    }

    #[test]
    fn test_get_covers_every_field() {
        let config = SiteConfig::builtin();
        let fields = SiteConfig::FIELDS;
        let all = [
            fields.title,
            fields.description,
            fields.cover_image,
            fields.logo,
            fields.lang,
            fields.site_url,
            fields.facebook,
            fields.twitter,
            fields.show_subscribe,
            fields.mailchimp_action,
            fields.mailchimp_name,
            fields.mailchimp_email_field_name,
            fields.google_site_verification,
            fields.footer,
        ];
        for field in all {
            assert!(config.get(field.key()).is_some(), "{}", field.as_str());
            assert!(
                config.get(&to_camel_case(field.key())).is_some(),
                "{}",
                field.as_str()
            );
        }
    }

    #[test]
    fn test_blank_path_is_empty() {
        let blank = PathBuf::from("  ");
        assert!(FieldValue::Path(&blank).is_empty());
        assert!(FieldValue::Path(Path::new("")).is_empty());
        assert!(!FieldValue::Path(Path::new("img/logo.png")).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
    }

    #[test]
    fn test_mailchimp_requires_all_fields() {
        let config = wired();
        let form = config.mailchimp().unwrap();
        assert_eq!(form.hidden_field, "b_123_456");
        assert_eq!(form.email_field, "MERGE0");
        assert_eq!(config.subscribe_form(), Some(form));

        let partial = SiteConfig {
            mailchimp_name: None,
            ..wired()
        };
        assert!(partial.mailchimp().is_none());
    }

    #[test]
    fn test_subscribe_form_gated_by_show_subscribe() {
        let config = SiteConfig {
            show_subscribe: false,
            ..wired()
        };
        assert!(config.mailchimp().is_some());
        assert!(config.subscribe_form().is_none());
    }

    #[test]
    fn test_social_links() {
        let config = SiteConfig::builtin();
        let links: Vec<_> = config.social_links().collect();
        assert_eq!(
            links,
            vec![
                (SocialNetwork::Facebook, "https://www.facebook.com/johannkerr"),
                (SocialNetwork::Twitter, "https://twitter.com/johann"),
            ]
        );

        let config = SiteConfig {
            facebook: None,
            ..SiteConfig::builtin()
        };
        assert_eq!(config.social_links().count(), 1);
    }

    #[test]
    fn test_url_for() {
        let config = SiteConfig::builtin();
        assert_eq!(
            config.url_for("img/blo-cover.jpg"),
            "https://johannkerr.com/img/blo-cover.jpg"
        );
        assert_eq!(config.url_for("/rss.xml"), "https://johannkerr.com/rss.xml");
        assert_eq!(config.url_for(""), "https://johannkerr.com");
        assert_eq!(config.url_for(&config.logo), "https://johannkerr.com/img/ghost-logo.png");
    }
}
