use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use crate::value::Kind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// A container operation was called on the wrong variant.
    #[error("expected {expected:?}, found {found:?}")]
    WrongKind { expected: Kind, found: Kind },

    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("member {key} is {found:?}, not {expected:?}")]
    TypeConflict {
        key: String,
        expected: Kind,
        found: Kind,
    },

    #[error("{reason} at offset {offset} in path {path:?}")]
    PathSyntax {
        path: String,
        offset: usize,
        reason: &'static str,
    },
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("invalid literal: {0}")]
    InvalidLiteral(String),

    #[error("no root value")]
    NoRoot,
    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
