//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error, warning or note with an
//! optional error code, the source file and position it refers to, labeled
//! spans and help text.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::{Location, Span},
};

/// A diagnostic message with source position information.
///
/// ```text
/// error[E206]: value out of range, expected 0 - 255
///   --> report.xml:4:21
///    |
///  4 |     <Font Color="RGB(300,0,0)"/>
///    |                  ^^^^^^^^^^^^^ in this attribute
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    file: Option<String>,
    location: Option<Location>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an informational diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the source file, if one was given to the parser.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The span of the first primary label.
    pub fn span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns `true` if the diagnostic ended the parse run.
    pub fn is_fatal(&self) -> bool {
        self.code.is_some_and(|code| code.is_fatal())
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add an unlabeled primary span.
    pub fn with_span(self, span: Span) -> Self {
        self.with_label(span, "")
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            file: None,
            location: None,
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.file().is_none());
        assert!(diag.location().is_none());
        assert!(diag.span().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::warning("use of undefined base style `Fancy`")
            .with_code(ErrorCode::E301)
            .with_file("doc.xml")
            .with_location(Location::new(3, 5))
            .with_secondary_label(Span::new(0..4), "in this style")
            .with_label(Span::new(10..20), "not defined")
            .with_help("define the base style first");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.code(), Some(ErrorCode::E301));
        assert_eq!(diag.file(), Some("doc.xml"));
        assert_eq!(diag.location(), Some(Location::new(3, 5)));
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.span(), Some(Span::new(10..20)));
        assert_eq!(diag.help(), Some("define the base style first"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("missing comma").with_code(ErrorCode::E207);
        assert_eq!(diag.to_string(), "error[E207]: missing comma");

        assert_eq!(Diagnostic::info("note").to_string(), "info: note");
    }

    #[test]
    fn test_fatal_flag_follows_code() {
        assert!(Diagnostic::error("eof").with_code(ErrorCode::E002).is_fatal());
        assert!(!Diagnostic::error("eof").is_fatal());
    }
}
