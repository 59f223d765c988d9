//! Configuration types for reading Quire documents.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`DiagnosticsConfig`] - Controls when reported diagnostics turn a
//!   completed parse run into an error.
//!
//! # Example
//!
//! ```
//! # use quire::config::{AppConfig, FailOn};
//! let config = AppConfig::default();
//! assert_eq!(config.diagnostics().fail_on(), FailOn::Never);
//! ```

use serde::Deserialize;

use quire_parser::error::Diagnostic;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagnostics configuration section.
    #[serde(default)]
    diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given diagnostics settings.
    pub fn new(diagnostics: DiagnosticsConfig) -> Self {
        Self { diagnostics }
    }

    /// Returns the diagnostics configuration.
    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }
}

/// Strictness of a [`DocumentReader`](crate::DocumentReader).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    /// Lowest severity that fails a completed run.
    #[serde(default)]
    fail_on: FailOn,
}

impl DiagnosticsConfig {
    pub fn new(fail_on: FailOn) -> Self {
        Self { fail_on }
    }

    /// Returns the severity threshold.
    pub fn fail_on(&self) -> FailOn {
        self.fail_on
    }
}

/// When diagnostics of a completed run are turned into an error.
///
/// A fatal run always fails, whatever this is set to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Never; the caller inspects the diagnostics itself.
    #[default]
    Never,
    /// On any error diagnostic.
    Error,
    /// On any error or warning diagnostic.
    Warning,
}

impl FailOn {
    /// Returns `true` if `diagnostics` reach this threshold.
    pub fn is_reached(self, diagnostics: &[Diagnostic]) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::Error => diagnostics.iter().any(|d| d.severity().is_error()),
            FailOn::Warning => diagnostics
                .iter()
                .any(|d| d.severity().is_error() || d.severity().is_warning()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_never_fails() {
        let diagnostics = [Diagnostic::error("boolean expected")];
        assert!(!AppConfig::default().diagnostics().fail_on().is_reached(&diagnostics));
    }

    #[test]
    fn test_thresholds() {
        let warning = [Diagnostic::warning("use of undefined base style")];
        let info = [Diagnostic::info("note")];

        assert!(FailOn::Warning.is_reached(&warning));
        assert!(!FailOn::Error.is_reached(&warning));
        assert!(!FailOn::Warning.is_reached(&info));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [diagnostics]
            fail_on = "warning"
            "#,
        )
        .expect("Failed to deserialize");
        assert_eq!(config.diagnostics().fail_on(), FailOn::Warning);

        let empty: AppConfig = toml::from_str("").expect("Failed to deserialize");
        assert_eq!(empty.diagnostics().fail_on(), FailOn::Never);
    }

    #[test]
    fn test_unknown_threshold_is_rejected() {
        let result = toml::from_str::<AppConfig>("[diagnostics]\nfail_on = \"sometimes\"");
        assert!(result.is_err());
    }
}
