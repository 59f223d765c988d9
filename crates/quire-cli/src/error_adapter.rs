//! Error adapter for converting Quire diagnostics to miette reports.
//!
//! This module provides the bridge between the library's diagnostic types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`quire_parser::error::ParseError`] carries every diagnostic of a run,
//! and each one is rendered independently. Diagnostics of a successful run
//! (warnings and recovered errors) go through the same adapter.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use quire::QuireError;
use quire_parser::error::{Diagnostic, Severity};

/// Adapter for a single quire diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.diag.file(), self.diag.location()) {
            (Some(file), Some(location)) => {
                write!(f, "{}:{location}: {}", file, self.diag.message())
            }
            _ => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            // Unlabeled spans only underline.
            let message = Some(label.message())
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`QuireError`] variants.
pub struct ErrorAdapter<'a>(pub &'a QuireError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            QuireError::Io(_) => "quire::io",
            QuireError::Parse { .. } => return None,
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a quire [`Span`](quire_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: quire_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`QuireError`] into a list of reportable errors.
///
/// For [`QuireError::Parse`], this returns one [`Reportable`] for each
/// diagnostic in the error. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &QuireError) -> Vec<Reportable<'_>> {
    match err {
        QuireError::Parse {
            err: parse_err,
            src,
        } => diagnostics_to_reportables(parse_err.diagnostics(), src),
        QuireError::Io(_) => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Wrap the diagnostics of a completed run over `src`.
pub fn diagnostics_to_reportables<'a>(
    diagnostics: &'a [Diagnostic],
    src: &'a str,
) -> Vec<Reportable<'a>> {
    diagnostics
        .iter()
        .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
        .collect()
}

/// Render `reportable` as a graphical report.
///
/// Falls back to the plain message if the report cannot be formatted.
pub fn render(reportable: &Reportable<'_>) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, reportable) {
        Ok(()) => writer,
        Err(_) => reportable.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use quire_parser::{
        Location, Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("boolean value expected")
            .with_code(ErrorCode::E202)
            .with_label(Span::new(3..8), "in this attribute")
            .with_help("use `true` or `false`");
        let err =
            QuireError::new_parse_error(ParseError::from(diag), "<p Format.KeepTogether=\"x\"/>");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "boolean value expected");
                assert_eq!(d.code().map(|c| c.to_string()).as_deref(), Some("E202"));
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first error").with_label(Span::new(0..5), "first"),
            Diagnostic::warning("second warning").with_label(Span::new(10..15), "second"),
            Diagnostic::error("third error").with_label(Span::new(20..25), "third"),
        ];
        let err = QuireError::new_parse_error(ParseError::from(diags), "source markup here...");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second warning");
        assert_eq!(reportables[2].to_string(), "third error");
    }

    #[test]
    fn test_display_includes_file_and_location() {
        let diag = Diagnostic::warning("use of undefined base style")
            .with_file("report.xml")
            .with_location(Location::new(3, 7));

        let adapter = DiagnosticAdapter::new(&diag, "");
        assert_eq!(adapter.to_string(), "report.xml:3:7: use of undefined base style");
    }

    #[test]
    fn test_severity_mapping() {
        let warning = Diagnostic::warning("warning");
        let info = Diagnostic::info("note");

        assert_eq!(
            DiagnosticAdapter::new(&warning, "").severity(),
            Some(miette::Severity::Warning)
        );
        assert_eq!(
            DiagnosticAdapter::new(&info, "").severity(),
            Some(miette::Severity::Advice)
        );
    }

    #[test]
    fn test_io_error() {
        let err = QuireError::Io(io::Error::new(io::ErrorKind::NotFound, "missing.xml"));

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: missing.xml");
                assert_eq!(e.code().map(|c| c.to_string()).as_deref(), Some("quire::io"));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let diag = Diagnostic::error("end tag does not match")
            .with_span(Span::new(0..5))
            .with_secondary_label(Span::new(10..15), "opened here");

        let adapter = DiagnosticAdapter::new(&diag, "some source markup");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), None);
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("opened here"));
    }

    #[test]
    fn test_render_contains_message() {
        let diag = Diagnostic::error("value out of range")
            .with_code(ErrorCode::E206)
            .with_label(Span::new(6..18), "in this attribute");
        let src = "<Font Color=\"RGB(300)\"/>";

        let reportables = diagnostics_to_reportables(std::slice::from_ref(&diag), src);
        let rendered = render(&reportables[0]);

        assert!(rendered.contains("value out of range"));
    }
}
