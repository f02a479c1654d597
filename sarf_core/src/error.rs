use std::path::PathBuf;
use thiserror::Error;

/// Why a string was rejected as a root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootError {
    #[error("root '{root}' has {found} letters, expected 3")]
    WrongLength { root: String, found: usize },

    #[error("root '{root}' contains '{letter}', which is not in the alphabet")]
    UnknownLetter { root: String, letter: char },
}

/// Why a template could not be registered as a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern name must not be empty")]
    Empty,

    #[error("pattern '{name}' has no slot for the {radical} radical")]
    MissingSlot { name: String, radical: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidRoot(#[from] RootError),

    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("root '{0}' is not registered")]
    RootNotFound(String),

    #[error("pattern '{0}' is not registered")]
    PatternNotFound(String),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write seed file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
