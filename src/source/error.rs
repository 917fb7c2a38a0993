//! Source loading errors

use std::fmt;
use std::path::PathBuf;

/// Error type for loading puzzle sources
///
/// Both variants are configuration errors: there is no puzzle to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Io { path: PathBuf, message: String },
    ContainerNotFound(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Failed to read {}: {message}", path.display())
            }
            Self::ContainerNotFound(id) => {
                write!(f, "Source element with ID {id} was not found.")
            }
        }
    }
}

impl std::error::Error for SourceError {}
