//! Error and diagnostic system for the Quire parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Severity levels, including informational notes
//! - Diagnostics tagged with file, line/column and byte span
//! - An append-only collector for a whole parse run
//!
//! # Overview
//!
//! Every problem found while reading markup becomes a [`Diagnostic`]. Most of
//! them are recorded and parsing continues. Only fatal problems (malformed
//! markup, input ending inside an open construct) end the run, in which case
//! the collected diagnostics are returned as a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use quire_parser::error::{Diagnostic, ErrorCode};
//! # use quire_parser::{Location, Span};
//! let diag = Diagnostic::error("boolean expected, found `yes`")
//!     .with_code(ErrorCode::E202)
//!     .with_file("report.xml")
//!     .with_location(Location::new(12, 7))
//!     .with_label(Span::new(310..315), "in this attribute")
//!     .with_help("use `true` or `false`");
//!
//! assert_eq!(diag.to_string(), "error[E202]: boolean expected, found `yes`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
