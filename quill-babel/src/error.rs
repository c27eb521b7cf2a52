//! Errors around the converters.
//!
//! Converting between a document and Markdown never fails. What can fail is choosing a
//! format (by name or by file extension) and reading or writing the document JSON.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No registered format has this name.
    FormatNotFound(String),
    /// The file name carries no extension a registered format claims.
    UnknownExtension(String),
    /// The source is not a valid document in the requested format.
    ParseError(String),
    /// The document could not be written in the requested format.
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::UnknownExtension(file) => {
                write!(f, "Could not detect format from filename '{file}'")
            }
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
