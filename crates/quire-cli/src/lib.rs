//! Quire CLI library
//!
//! This module contains the core CLI logic for the Quire document reader.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use quire::{DdlObject, DocumentReader, QuireError, dom::Document, severity_counts};

use error_adapter::{diagnostics_to_reportables, render};

/// Run the Quire CLI application
///
/// Reads the input markup, logs every diagnostic of the run as a rendered
/// report and prints a summary of the resulting object model to stdout.
///
/// # Errors
///
/// Returns `QuireError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Fatal parse runs, or diagnostics reaching the configured threshold
pub fn run(args: &Args) -> Result<(), QuireError> {
    info!(input_path = args.input, object = args.object; "Processing markup");

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;
    let reader = DocumentReader::new(app_config);

    let (summary, diagnostics) = if args.object {
        let (object, diagnostics) = reader
            .read_object(&source, Some(args.input.as_str()))?
            .into_parts();
        (summarize_object(&object), diagnostics)
    } else {
        let (document, diagnostics) = reader
            .read_named_document(&source, Some(args.input.as_str()))?
            .into_parts();
        (summarize_document(&document), diagnostics)
    };

    for reportable in diagnostics_to_reportables(&diagnostics, &source) {
        warn!("{}", render(&reportable));
    }

    for line in summary {
        println!("{line}");
    }

    let (errors, warnings) = severity_counts(&diagnostics);
    info!(errors, warnings; "Markup read");

    Ok(())
}

/// One line per section of `document`, counting its block elements.
pub fn summarize_document(document: &Document) -> Vec<String> {
    let mut lines = Vec::with_capacity(document.sections().len() + 1);
    if let Some(title) = &document.info.title {
        lines.push(format!("title: {title}"));
    }
    lines.extend(document.sections().iter().enumerate().map(|(index, section)| {
        let elements = section.elements();
        format!(
            "section {}: {} paragraphs, {} tables, {} images, {} charts",
            index + 1,
            elements.count_kind("paragraph"),
            elements.count_kind("table"),
            elements.count_kind("image"),
            elements.count_kind("chart"),
        )
    }));
    lines
}

fn summarize_object(object: &DdlObject) -> Vec<String> {
    match object {
        DdlObject::Document(document) => summarize_document(document),
        DdlObject::Styles(styles) => vec![format!("styles: {}", styles.iter().count())],
        other => vec![other.kind().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use quire::DocumentReader;

    use super::*;

    #[test]
    fn test_summarize_document() {
        let source = r#"
            <document>
              <attributes><Info Title="Notes"/></attributes>
              <sections>
                <section>Intro<p>More</p><image Name="logo.png"/></section>
                <section><table><columns><column/></columns><rows/></table></section>
              </sections>
            </document>"#;
        let parsed = DocumentReader::default()
            .read_document(source)
            .expect("Failed to read");

        assert_eq!(
            summarize_document(parsed.value()),
            [
                "title: Notes",
                "section 1: 2 paragraphs, 0 tables, 1 images, 0 charts",
                "section 2: 0 paragraphs, 1 tables, 0 images, 0 charts",
            ]
        );
    }

    #[test]
    fn test_summarize_object() {
        let parsed = DocumentReader::default()
            .read_object("<textframe/>", None)
            .expect("Failed to read");

        assert_eq!(summarize_object(parsed.value()), ["textframe"]);
    }
}
