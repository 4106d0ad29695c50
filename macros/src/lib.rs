//! Proc macros for blogcfg.
//!
//! # Config derive macro
//!
//! Generates field path accessors, the list of required fields and a
//! commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "")]
//! /// Blog configuration.
//! pub struct SiteConfig {
//!     /// Site title.
//!     #[config(required, default = "My Blog", inline_doc)]
//!     pub title: String,
//!
//!     /// Language tag (BCP 47).
//!     #[config(required, default = "en")]
//!     pub lang: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteConfig::FIELDS.title -> FieldPath("title")
//! // - SiteConfig::REQUIRED     -> [FieldPath("title"), FieldPath("lang")]
//! // - SiteConfig::template()   -> TOML string with comments
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (empty for top level)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Hide from template output only
//! - `#[config(required)]` - List in `REQUIRED`
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Render a one-line doc as a trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SocialConfig` → `social`
//! - `SubscribeSettings` → `subscribe`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, REQUIRED and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
