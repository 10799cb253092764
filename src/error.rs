//! Error types for query parsing and catalog decoding.

use thiserror::Error;

/// Errors produced while turning a query string into a colour.
///
/// Every variant maps to the same user-facing "invalid colour" state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not `#RRGGBB`, `rgb(r, g, b)` or `hsl(h, s, l)`
    #[error("invalid color syntax: {input:?}")]
    InvalidSyntax {
        /// The rejected query
        input: String,
    },

    /// Syntactically valid, but a component is outside its range
    #[error("color component out of range: {input:?}")]
    OutOfRange {
        /// The rejected query
        input: String,
    },

    /// No 6- or 3-digit hex run could be found
    #[error("no hex digits found in {input:?}")]
    NoHexDigits {
        /// The string that was scanned
        input: String,
    },
}

/// Errors that can occur while decoding a colour catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
