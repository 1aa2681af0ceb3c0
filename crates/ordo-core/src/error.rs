//! Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur when building a rule catalog.
///
/// Only custom catalogs can fail: the built-in catalog is validated by tests
/// and sampling itself has no error conditions.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no rules.
    #[error("rule catalog is empty")]
    Empty,

    /// A rule has a blank title or description.
    #[error("rule {index} has a blank title or description")]
    BlankRule {
        /// Zero-based index of the offending rule.
        index: usize,
    },

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
