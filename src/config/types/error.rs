//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("site configuration is already initialized")]
    AlreadyInitialized,

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Validation diagnostics, if this error came from validation.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// What rule a diagnostic violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Required field absent or empty.
    MissingRequiredField,
    /// `lang` is not a BCP 47 tag.
    MalformedLanguageTag,
    /// Not an absolute http(s) URL, or `site_url` ends with `/`.
    MalformedUrl,
    /// Image path is not relative.
    MalformedPath,
}

impl DiagnosticKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing required field",
            Self::MalformedLanguageTag => "malformed language tag",
            Self::MalformedUrl => "malformed url",
            Self::MalformedPath => "malformed path",
        }
    }
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "site_url")
    pub field: FieldPath,
    pub kind: DiagnosticKind,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.kind.label().dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal findings (cross-field inconsistencies, unknown keys).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, kind: DiagnosticKind, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, kind, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        kind: DiagnosticKind,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, kind, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "configuration looks inconsistent:");
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// First error reported against `field`.
    pub fn error_for(&self, field: FieldPath) -> Option<&ConfigDiagnostic> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("blog.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("blog.toml"));

        let display = format!("{}", ConfigError::AlreadyInitialized);
        assert!(display.contains("already initialized"));
    }

    #[test]
    fn test_diagnostics_display_names_field() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::new("title"),
            DiagnosticKind::MissingRequiredField,
            "required field is empty",
            "set a site title",
        );
        diag.error(
            FieldPath::new("lang"),
            DiagnosticKind::MalformedLanguageTag,
            "'english' is not a BCP 47 language tag",
        );

        // Colored output: check the plain pieces
        let display = format!("{diag}");
        assert!(display.contains("title"));
        assert!(display.contains("missing required field"));
        assert!(display.contains("set a site title"));
        assert!(display.contains("'english' is not a BCP 47 language tag"));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("show_subscribe"), "no form action");
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_error_for() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(
            FieldPath::new("site_url"),
            DiagnosticKind::MalformedUrl,
            "trailing slash",
        );
        let err = diag.error_for(FieldPath::new("site_url")).unwrap();
        assert_eq!(err.kind, DiagnosticKind::MalformedUrl);
        assert!(diag.error_for(FieldPath::new("title")).is_none());
    }
}
