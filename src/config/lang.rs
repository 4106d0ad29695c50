//! BCP 47 language tag syntax check.
//!
//! Structural only: subtags are checked for shape and order, not looked up in
//! the IANA registry. Primary language subtags are limited to the 2-3 letter
//! ISO 639 form (plus extlang), since the 4 and 5-8 letter forms are reserved
//! and would otherwise accept plain words such as `english`.
//!
//! ```text
//! langtag  = language ["-" script] ["-" region] *("-" variant)
//!            *("-" extension) ["-" privateuse]
//! language = 2*3ALPHA *3("-" 3ALPHA)
//! script   = 4ALPHA
//! region   = 2ALPHA / 3DIGIT
//! variant  = 5*8alphanum / (DIGIT 3alphanum)
//! ```

use regex::Regex;
use std::sync::LazyLock;

static LANG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        // language (+ extlang)
        r"[A-Za-z]{2,3}(?:-[A-Za-z]{3}){0,3}",
        // script
        r"(?:-[A-Za-z]{4})?",
        // region
        r"(?:-(?:[A-Za-z]{2}|[0-9]{3}))?",
        // variants
        r"(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*",
        // extensions (any singleton but x)
        r"(?:-[0-9A-WYZa-wyz](?:-[A-Za-z0-9]{2,8})+)*",
        // private use suffix
        r"(?:-[Xx](?:-[A-Za-z0-9]{1,8})+)?",
        // private use only
        r"|[Xx](?:-[A-Za-z0-9]{1,8})+",
        r")$"
    ))
    .unwrap()
});

/// Irregular grandfathered tags that the grammar above cannot express.
const GRANDFATHERED: &[&str] = &[
    "en-GB-oed",
    "i-ami",
    "i-bnn",
    "i-default",
    "i-enochian",
    "i-hak",
    "i-klingon",
    "i-lux",
    "i-mingo",
    "i-navajo",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
    "sgn-BE-FR",
    "sgn-BE-NL",
    "sgn-CH-DE",
];

/// Check whether `tag` is a syntactically valid BCP 47 language tag.
pub fn is_valid_language_tag(tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    LANG_TAG.is_match(tag) || GRANDFATHERED.iter().any(|g| g.eq_ignore_ascii_case(tag))
}
