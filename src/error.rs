//! Error types for reading, rendering and writing.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Kind of number a command parameter must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// Errors that end a render. Line and parameter numbers are 1-based.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file format not recognized")]
    Format,

    #[error("invalid image dimensions {width}x{height}: must be >0 and <={max}")]
    Dimensions { width: i64, height: i64, max: u32 },

    #[error("line {line}: unexpected end of file")]
    UnexpectedEof { line: usize },

    #[error("line {line}: line too long")]
    LineTooLong { line: usize },

    #[error("line {line}: unrecognized command '{command}'")]
    UnknownCommand { line: usize, command: char },

    #[error("line {line}: command '{command}' expects {expected} parameters, got {got}")]
    ParameterCount {
        line: usize,
        command: char,
        expected: usize,
        got: usize,
    },

    #[error("line {line}, parameter {parameter}: expected {expected}")]
    InvalidNumber {
        line: usize,
        parameter: usize,
        expected: NumberKind,
    },

    #[error("line {line}, parameter {parameter}: channel value {value} out of range 0..=255")]
    ChannelRange {
        line: usize,
        parameter: usize,
        value: i64,
    },

    #[error("line {line}: command '{command}' needs at least one point, got {count}")]
    PointCount {
        line: usize,
        command: char,
        count: i64,
    },

    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedEof { line }
            | Error::LineTooLong { line }
            | Error::UnknownCommand { line, .. }
            | Error::ParameterCount { line, .. }
            | Error::InvalidNumber { line, .. }
            | Error::ChannelRange { line, .. }
            | Error::PointCount { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
