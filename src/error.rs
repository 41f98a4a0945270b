//! Error type for header generation.

use std::path::PathBuf;

/// Errors raised while building or writing a definitions header.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Macro names must be C identifiers.
    #[error("invalid macro name {0:?}")]
    InvalidMacroName(String),

    /// A macro was defined twice in the same header.
    #[error("macro {0} is defined more than once")]
    DuplicateMacro(String),

    /// A value could not be rendered as a string literal.
    #[error("failed to quote macro value")]
    Quote(#[from] serde_json::Error),

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read existing header {}", path.display())]
    ReadExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write header {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output path exists but is not a regular file.
    #[error("{} exists and is not a regular file", path.display())]
    NotAFile { path: PathBuf },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
