use std::io;

use crate::ast::Location;

/// Represents all errors that can occur while loading program files.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not end in `.stko` or `.stacko`.
    BadExtension {
        /// The offending path.
        path: String,
    },
    /// The file could not be opened or read.
    Unreadable {
        /// The path that failed to load.
        path:   String,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A `file` directive names no path.
    MissingImportPath {
        /// Where the directive appeared.
        location: Location,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadExtension { path } => {
                write!(f, "Extension of '{path}' was not '.stko' or '.stacko'.")
            },
            Self::Unreadable { path, source } => {
                write!(f, "Failed to open '{path}': {source}.")
            },
            Self::MissingImportPath { location } => {
                write!(f, "{location}: Expected a file path after 'file', found nothing instead.")
            },
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
