//! Field rules for [`SiteConfig`].
//!
//! Every rule reports into one [`ConfigDiagnostics`] so a broken file shows
//! all of its problems at once.

use super::lang::is_valid_language_tag;
use super::util::{check_absolute_url, is_blank};
use super::{ConfigDiagnostics, ConfigPresence, DiagnosticKind, FieldPath, SiteConfig};
use std::path::Path;

use DiagnosticKind::{MalformedLanguageTag, MalformedPath, MalformedUrl, MissingRequiredField};

impl SiteConfig {
    /// Run every check and collect the results.
    ///
    /// `presence` is the key set of the raw file, when there is one; with it,
    /// required keys that were left out are reported as missing instead of
    /// being silently defaulted.
    pub fn diagnose(&self, presence: Option<&ConfigPresence>) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.check_required(presence, &mut diag);
        self.check_lang(&mut diag);
        self.check_site_url(&mut diag);
        self.check_image_paths(&mut diag);
        self.check_optional_urls(&mut diag);
        self.check_subscribe(&mut diag);

        diag
    }

    fn check_required(&self, presence: Option<&ConfigPresence>, diag: &mut ConfigDiagnostics) {
        for &field in Self::REQUIRED {
            if let Some(presence) = presence
                && !presence.contains_any(&field_spellings(field))
            {
                diag.error_with_hint(
                    field,
                    MissingRequiredField,
                    "required field is missing",
                    format!("add `{} = ...` to the config file", field.key()),
                );
                continue;
            }

            if self.get(field.key()).is_some_and(|v| v.is_empty()) {
                diag.error(field, MissingRequiredField, "required field is empty");
            }
        }
    }

    fn check_lang(&self, diag: &mut ConfigDiagnostics) {
        if is_blank(&self.lang) {
            return;
        }
        if !is_valid_language_tag(&self.lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                MalformedLanguageTag,
                format!("'{}' is not a BCP 47 language tag", self.lang),
                "use a tag like \"en\", \"en-US\" or \"zh-Hans\"",
            );
        }
    }

    fn check_site_url(&self, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.site_url;
        if is_blank(&self.site_url) {
            return;
        }
        if let Err(reason) = check_absolute_url(&self.site_url) {
            diag.error_with_hint(
                field,
                MalformedUrl,
                reason,
                "use format like https://example.com",
            );
            return;
        }
        if self.site_url.ends_with('/') {
            diag.error_with_hint(
                field,
                MalformedUrl,
                format!("'{}' ends with a trailing slash", self.site_url),
                format!("use \"{}\"", self.site_url.trim_end_matches('/')),
            );
        }
    }

    fn check_image_paths(&self, diag: &mut ConfigDiagnostics) {
        let images = [
            (Self::FIELDS.cover_image, &self.cover_image),
            (Self::FIELDS.logo, &self.logo),
        ];
        for (field, path) in images {
            if is_absolute_path(path) {
                diag.error_with_hint(
                    field,
                    MalformedPath,
                    format!("'{}' is absolute", path.display()),
                    "use a path relative to the site root, e.g. \"img/logo.png\"",
                );
            }
        }
    }

    fn check_optional_urls(&self, diag: &mut ConfigDiagnostics) {
        let profiles = [
            (Self::FIELDS.facebook, &self.facebook),
            (Self::FIELDS.twitter, &self.twitter),
        ];
        for (field, value) in profiles {
            if let Some(url) = value
                && let Err(reason) = check_absolute_url(url)
            {
                diag.error_with_hint(
                    field,
                    MalformedUrl,
                    reason,
                    format!("use the full profile URL, not a username (`{}`)", field.key()),
                );
            }
        }

        if let Some(action) = &self.mailchimp_action
            && let Err(reason) = check_absolute_url(action)
        {
            diag.error_with_hint(
                Self::FIELDS.mailchimp_action,
                MalformedUrl,
                reason,
                "copy the form action from the mailchimp embed code",
            );
        }
    }

    /// Cross-field consistency of the subscribe wiring. Warnings only.
    fn check_subscribe(&self, diag: &mut ConfigDiagnostics) {
        let wiring = [
            self.mailchimp_action.is_some(),
            self.mailchimp_name.is_some(),
            self.mailchimp_email_field_name.is_some(),
        ];
        let set = wiring.iter().filter(|&&b| b).count();

        if self.show_subscribe && self.mailchimp_action.is_none() {
            diag.warn(
                Self::FIELDS.show_subscribe,
                format!(
                    "subscribe boxes are shown but {} is not configured",
                    Self::FIELDS.mailchimp_action.as_str()
                ),
            );
        } else if set > 0 && set < wiring.len() {
            diag.warn(
                Self::FIELDS.mailchimp_action,
                "mailchimp wiring is incomplete, the subscribe form is disabled",
            );
        }
    }
}

/// Snake and camel spellings of a field key.
fn field_spellings(field: FieldPath) -> [String; 2] {
    let key = field.key();
    [key.to_string(), to_camel_case(key)]
}

pub(super) fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Absolute on any platform: leading `/` or `\`, or a Windows drive prefix.
fn is_absolute_path(path: &Path) -> bool {
    if path.is_absolute() || path.has_root() {
        return true;
    }
    let s = path.to_string_lossy();
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
