//! Blogcfg - typed site configuration for a personal blog.
//!
//! One [`SiteConfig`] per process: either the built-in instance or a
//! validated `blog.toml`, installed once and read through [`load`].
//!
//! ```ignore
//! let config = blogcfg::load()?;
//! if let Some(form) = config.subscribe_form() {
//!     render_subscribe(form.action, form.hidden_field, form.email_field);
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, DiagnosticKind, FieldValue, MailchimpForm, SiteConfig,
    SocialNetwork, init_config, load,
};
