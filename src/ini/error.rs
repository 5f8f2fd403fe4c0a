use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::str::ParseBoolError;

use thiserror::Error;

/// Result alias used throughout the reader
pub type Result<T> = std::result::Result<T, IniError>;

/// Error types for the INI reader
#[derive(Error, Debug)]
pub enum IniError {
    #[error("input file path is empty")]
    EmptyPath,

    #[error("no such file '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid character '{ch}' at line {line}")]
    InvalidCharacter { ch: char, line: usize },

    #[error("key is empty at line {line}")]
    EmptyKey { line: usize },

    #[error("section '{section}' doesn't exist at line {line}")]
    UndeclaredSection { section: String, line: usize },

    #[error("invalid line at line {line}")]
    InvalidLine { line: usize },

    #[error("section '{section}' doesn't exist")]
    SectionNotFound { section: String },

    #[error("key '{section}.{key}' doesn't exist")]
    KeyNotFound { section: String, key: String },

    #[error("cannot convert '{raw}' of key '{section}.{key}' to {target}")]
    Conversion {
        section: String,
        key: String,
        raw: String,
        target: &'static str,
        #[source]
        source: ParseFailure,
    },
}

/// Underlying parse error of a failed typed conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Bool(#[from] ParseBoolError),
}

/// Error category, for callers that branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IniErrorKind {
    EmptyPath,
    Open,
    InvalidCharacter,
    EmptyKey,
    UndeclaredSection,
    InvalidLine,
    SectionNotFound,
    KeyNotFound,
    Conversion,
}

impl IniError {
    pub fn kind(&self) -> IniErrorKind {
        match self {
            IniError::EmptyPath => IniErrorKind::EmptyPath,
            IniError::Open { .. } => IniErrorKind::Open,
            IniError::InvalidCharacter { .. } => IniErrorKind::InvalidCharacter,
            IniError::EmptyKey { .. } => IniErrorKind::EmptyKey,
            IniError::UndeclaredSection { .. } => IniErrorKind::UndeclaredSection,
            IniError::InvalidLine { .. } => IniErrorKind::InvalidLine,
            IniError::SectionNotFound { .. } => IniErrorKind::SectionNotFound,
            IniError::KeyNotFound { .. } => IniErrorKind::KeyNotFound,
            IniError::Conversion { .. } => IniErrorKind::Conversion,
        }
    }

    /// Line number (1-based) for errors raised while parsing
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::InvalidCharacter { line, .. }
            | IniError::EmptyKey { line }
            | IniError::UndeclaredSection { line, .. }
            | IniError::InvalidLine { line } => Some(*line),
            _ => None,
        }
    }

    /// Section the error refers to, if any
    pub fn section(&self) -> Option<&str> {
        match self {
            IniError::UndeclaredSection { section, .. }
            | IniError::SectionNotFound { section }
            | IniError::KeyNotFound { section, .. }
            | IniError::Conversion { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Key the error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            IniError::KeyNotFound { key, .. } | IniError::Conversion { key, .. } => Some(key),
            _ => None,
        }
    }
}
