//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{extract_doc_comment, get_custom_name, get_default_value, has_attr};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: bool,
    pub default: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub required: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc: extract_doc_comment(attrs),
            inline_doc: has_attr(attrs, "inline_doc"),
            default: get_default_value(attrs),
            skip: has_attr(attrs, "skip"),
            hidden: has_attr(attrs, "hidden"),
            required: has_attr(attrs, "required"),
            ty: field.ty.clone(),
        })
    }

    /// Dotted path of this field inside `section`.
    pub fn full_path(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{}.{}", section, self.toml_name)
        }
    }

    /// Doc comment usable as a trailing `# ...` comment.
    pub fn inline_comment(&self) -> Option<&str> {
        if !self.inline_doc {
            return None;
        }
        self.doc.as_deref().filter(|doc| !doc.contains('\n'))
    }
}
