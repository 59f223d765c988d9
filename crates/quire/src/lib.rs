//! Quire - compile document description markup into a typed object model.
//!
//! Reads the XML-encoded document description language (DDL) into the
//! [`dom`] of documents, styles, sections, paragraphs, tables and charts,
//! reporting every problem as a positioned diagnostic.

pub mod config;

mod error;

pub use quire_core::{color, dom, meta, unit};
pub use quire_parser::{DdlObject, Parsed, error as diagnostics};

pub use error::QuireError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use quire_core::dom::Document;
use quire_parser::error::{Diagnostic, ParseError};

use config::AppConfig;

/// Reader turning DDL markup into document objects.
///
/// A completed run returns the tree together with its diagnostics. Whether
/// diagnostics fail the run is decided by the configured
/// [`FailOn`](config::FailOn) threshold.
///
/// # Examples
///
/// ```rust
/// use quire::{DocumentReader, config::AppConfig};
///
/// let source = "<document><sections><section>Hello</section></sections></document>";
///
/// let reader = DocumentReader::new(AppConfig::default());
/// let parsed = reader.read_document(source).expect("Failed to read");
/// assert_eq!(parsed.value().sections().len(), 1);
///
/// // Or use default config
/// let reader = DocumentReader::default();
/// ```
#[derive(Debug, Default)]
pub struct DocumentReader {
    config: AppConfig,
}

impl DocumentReader {
    /// Create a new reader with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Read a `<document>` root from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Parse`] when the run was fatal or the
    /// diagnostics reach the configured threshold.
    pub fn read_document(&self, source: &str) -> Result<Parsed<Document>, QuireError> {
        self.read_named_document(source, None)
    }

    /// Read a `<document>` root from the file at `path`.
    ///
    /// Diagnostics carry the path as their file name.
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`DocumentReader::read_document`].
    pub fn read_document_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Parsed<Document>, QuireError> {
        let path = path.as_ref();
        debug!(path:% = path.display(); "Reading document file");
        let source = fs::read_to_string(path)?;
        let name = path.display().to_string();
        self.read_named_document(&source, Some(&name))
    }

    /// Read exactly one top-level construct from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Parse`] when the run was fatal, the root is not
    /// a supported construct, or the diagnostics reach the configured
    /// threshold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quire::{DdlObject, DocumentReader};
    ///
    /// let reader = DocumentReader::default();
    /// let parsed = reader.read_object("<p>Standalone</p>", None).expect("Failed to read");
    /// assert!(matches!(parsed.value(), DdlObject::Paragraph(_)));
    /// ```
    pub fn read_object(
        &self,
        source: &str,
        file: Option<&str>,
    ) -> Result<Parsed<DdlObject>, QuireError> {
        info!(file = file.unwrap_or("<input>"); "Reading object");
        let parsed = quire_parser::parse_object(source, file)
            .map_err(|err| QuireError::new_parse_error(err, source))?;
        trace!(kind = parsed.value().kind(); "Object read");
        self.check(parsed, source)
    }

    /// Read a `<document>` root, naming the source `file` in diagnostics.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentReader::read_document`].
    pub fn read_named_document(
        &self,
        source: &str,
        file: Option<&str>,
    ) -> Result<Parsed<Document>, QuireError> {
        info!(file = file.unwrap_or("<input>"); "Reading document");
        let parsed = quire_parser::parse_document(source, file)
            .map_err(|err| QuireError::new_parse_error(err, source))?;
        debug!(sections = parsed.value().sections().len(); "Document read");
        self.check(parsed, source)
    }

    /// Applies the configured strictness to a completed run.
    fn check<T>(&self, parsed: Parsed<T>, source: &str) -> Result<Parsed<T>, QuireError> {
        let fail_on = self.config.diagnostics().fail_on();
        if !fail_on.is_reached(parsed.diagnostics()) {
            return Ok(parsed);
        }
        debug!(fail_on:? = fail_on; "Diagnostics reached the failure threshold");
        let (_, diagnostics) = parsed.into_parts();
        Err(QuireError::new_parse_error(
            ParseError::new(diagnostics),
            source,
        ))
    }
}

/// Counts `diagnostics` by severity as `(errors, warnings)`.
pub fn severity_counts(diagnostics: &[Diagnostic]) -> (usize, usize) {
    diagnostics.iter().fold((0, 0), |(errors, warnings), d| {
        let severity = d.severity();
        (
            errors + usize::from(severity.is_error()),
            warnings + usize::from(severity.is_warning()),
        )
    })
}
