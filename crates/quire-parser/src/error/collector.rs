//! Collector for accumulating diagnostics during a parse run.

use log::debug;

use crate::error::{Diagnostic, ParseError, Severity};

/// An append-only list of diagnostics.
///
/// Diagnostics are kept in the order they were reported and are never
/// removed or deduplicated.
///
/// ```
/// # use quire_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(
///     Diagnostic::warning("use of undefined style `Quote`").with_code(ErrorCode::E302),
/// );
/// collector.emit(Diagnostic::error("boolean expected").with_code(ErrorCode::E202));
///
/// assert!(collector.has_errors());
/// assert_eq!(collector.diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(diagnostic:% = diagnostic; "Diagnostic reported");
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Number of diagnostics at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection, failing if any error was reported.
    ///
    /// Warnings and notes are discarded in the success case.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert!(!collector.has_errors());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_keeps_order_and_duplicates() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("same"));
        collector.emit(Diagnostic::warning("other"));
        collector.emit(Diagnostic::error("same"));

        let messages: Vec<_> = collector
            .diagnostics()
            .iter()
            .map(Diagnostic::message)
            .collect();
        assert_eq!(messages, ["same", "other", "same"]);
        assert_eq!(collector.count(Severity::Error), 2);
    }

    #[test]
    fn test_collector_warnings_only_finish_ok() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::info("note"));

        assert!(!collector.has_errors());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_finish_with_errors() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("test error"));
        collector.emit(Diagnostic::warning("test warning"));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "test error");
    }
}
