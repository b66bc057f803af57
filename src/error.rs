//! Error types for the cleaning pipeline.
//!
//! The taxonomy follows the two collaborators around the pipeline and the passes
//! themselves:
//!
//! - [`CleanError::NotFound`] and [`CleanError::Parse`] come from the loader and abort
//!   the run before any pass executes.
//! - [`CleanError::ColumnNotFound`] is what a pass sees when a column it needs is
//!   absent. Passes turn it into a skipped outcome instead of failing.
//! - [`CleanError::Write`] comes from the persister. The pipeline reports it and
//!   finishes normally.
//!
//! ```
//! use datascrub::error::CleanError;
//!
//! fn describe(err: &CleanError) -> &'static str {
//!     match err {
//!         CleanError::NotFound(_) | CleanError::Parse(_) => "load failed",
//!         CleanError::Write(_) => "save failed",
//!         _ => "other",
//!     }
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for datascrub operations.
#[derive(Debug)]
pub enum CleanError {
    /// Input file does not exist
    NotFound(PathBuf),

    /// Input could not be parsed as a delimited table
    Parse(String),

    /// A referenced column is absent from the table
    ColumnNotFound(String),

    /// Output could not be persisted
    Write(String),

    /// Invalid cleaning configuration
    Config(String),

    /// Errors raised by the table engine while transforming data
    DataProcessing(String),

    /// I/O errors outside of load/save
    Io(std::io::Error),
}

impl CleanError {
    /// True for the errors that stop a run before any pass executes.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Parse(_))
    }
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Parse(msg) => write!(f, "Error reading data: {msg}"),
            Self::ColumnNotFound(name) => write!(f, "Column '{name}' does not exist"),
            Self::Write(msg) => write!(f, "Write error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<regex::Error> for CleanError {
    fn from(err: regex::Error) -> Self {
        Self::Config(format!("invalid pattern: {err}"))
    }
}

impl From<polars::error::PolarsError> for CleanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for datascrub operations.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error, keeping its category.
    fn context(self, msg: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CleanError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let msg = msg.into();
            match e.into() {
                CleanError::Parse(inner) => CleanError::Parse(format!("{msg}: {inner}")),
                CleanError::Write(inner) => CleanError::Write(format!("{msg}: {inner}")),
                CleanError::Config(inner) => CleanError::Config(format!("{msg}: {inner}")),
                CleanError::DataProcessing(inner) => {
                    CleanError::DataProcessing(format!("{msg}: {inner}"))
                }
                other => other,
            }
        })
    }
}
