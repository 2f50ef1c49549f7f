//! Extraction error taxonomy.

use thiserror::Error;

/// Fatal conditions while extracting dependencies from one document.
///
/// Any of these aborts the whole run; there is no partial output.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document is not valid JSON.
    #[error("document is not valid SPDX JSON: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The document parsed but has no top-level `packages` list.
    #[error("document has no `packages` list")]
    MissingPackages,

    /// A package entry lacks a required field.
    #[error("package entry {index} is missing required field `{field}`")]
    MissingRequiredField { index: usize, field: &'static str },
}
