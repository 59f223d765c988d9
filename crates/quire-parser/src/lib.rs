//! # Quire Parser
//!
//! Reader for the XML-encoded Quire document description language (DDL).
//! This crate turns markup into the document object model of
//! [`quire_core`], collecting every problem it finds as a positioned
//! [`error::Diagnostic`] instead of stopping at the first one.
//!
//! ## Usage
//!
//! ```
//! # use quire_parser::{parse_document, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <document>
//!           <sections>
//!             <section>Hello World</section>
//!           </sections>
//!         </document>
//!     "#;
//!
//!     let parsed = parse_document(source, Some("hello.xml"))?;
//!     assert!(!parsed.has_errors());
//!     assert_eq!(parsed.value().sections().len(), 1);
//!     Ok(())
//! }
//! ```

mod assign;
mod color;
mod cursor;
pub mod error;
mod parser;
#[cfg(test)]
mod parser_tests;
mod scanner;
mod span;
mod symbol;

pub use assign::{assign, assign_attribute};
pub use color::parse_color;
pub use parser::DdlObject;
pub use scanner::AttributeScanner;
pub use span::{LineIndex, Location, Span};
pub use symbol::Symbol;

use log::info;
use quire_core::dom::Document;

use error::{Diagnostic, ParseError, Severity};
use parser::Parser;

/// The result of a parse run that reached the end of its input.
///
/// The value may be partially populated when recoverable errors were
/// reported; inspect [`Parsed::diagnostics`] to decide whether to use it.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Every diagnostic of the run, in the order it was reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns `true` if any error-severity diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    /// Returns `true` if any diagnostic of warning severity or worse was
    /// reported.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity().is_error() || d.severity().is_warning())
    }
}

/// Parse a `<document>` root into a [`Document`].
///
/// Recoverable problems are reported in the returned diagnostics and never
/// stop the run. A root other than `<document>` is reported and yields an
/// empty document.
///
/// # Arguments
///
/// * `source` - The DDL markup
/// * `file` - Name of the source, attached to every diagnostic
///
/// # Errors
///
/// Returns a [`ParseError`] carrying all diagnostics of the run when the
/// markup is not well-formed or ends inside an open construct.
///
/// # Example
///
/// ```
/// # use quire_parser::{parse_document, error::ParseError};
///
/// fn main() -> Result<(), ParseError> {
///     let parsed = parse_document("<document/>", None)?;
///     assert!(parsed.value().sections().is_empty());
///     Ok(())
/// }
/// ```
pub fn parse_document(source: &str, file: Option<&str>) -> Result<Parsed<Document>, ParseError> {
    let mut parser = Parser::new(source, file);
    let document = parser.document();
    finish(document, parser.into_diagnostics(), file)
}

/// Parse exactly one top-level construct: a document, a styles block, a
/// section, a table, a text frame or a paragraph.
///
/// # Errors
///
/// Returns a [`ParseError`] when the run was fatal or the root element is
/// not one of the supported constructs.
///
/// # Example
///
/// ```
/// # use quire_parser::{parse_object, DdlObject, error::ParseError};
///
/// fn main() -> Result<(), ParseError> {
///     let parsed = parse_object("<p Style=\"Heading1\">Introduction</p>", None)?;
///     let DdlObject::Paragraph(paragraph) = parsed.value() else {
///         panic!("expected a paragraph");
///     };
///     assert_eq!(paragraph.plain_text(), "Introduction");
///     Ok(())
/// }
/// ```
pub fn parse_object(source: &str, file: Option<&str>) -> Result<Parsed<DdlObject>, ParseError> {
    let mut parser = Parser::new(source, file);
    let object = parser.object();
    finish(object, parser.into_diagnostics(), file)
}

fn finish<T>(
    value: Option<T>,
    diagnostics: Vec<Diagnostic>,
    file: Option<&str>,
) -> Result<Parsed<T>, ParseError> {
    let count = |severity: Severity| {
        diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    };
    info!(
        file = file.unwrap_or("<input>"),
        errors = count(Severity::Error),
        warnings = count(Severity::Warning),
        complete = value.is_some();
        "Parse run finished"
    );
    match value {
        Some(value) => Ok(Parsed { value, diagnostics }),
        None => Err(ParseError::new(diagnostics)),
    }
}
