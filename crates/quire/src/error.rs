//! Error types for Quire operations.
//!
//! This module provides the main error type [`QuireError`] which wraps the
//! error conditions that can occur while reading a document.

use std::io;

use thiserror::Error;

use quire_parser::error::ParseError;

/// The main error type for Quire operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries every diagnostic of the run together with the
/// source text, so callers can render source-annotated reports.
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl QuireError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
