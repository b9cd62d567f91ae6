//! Inline directive failures.

use thiserror::Error;

/// A directive that could not be resolved.
///
/// The `Display` output is the literal marker substituted into the expanded
/// text at the directive's location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// The depth budget was exhausted before an inclusion could be read.
    #[error("[ERROR: Maximum inclusion depth reached]")]
    DepthExceeded,

    /// A file directive named a path that does not exist.
    #[error("[ERROR: File {path} not found]")]
    FileNotFound { path: String },

    /// A file directive named a path that exists but could not be read as text.
    #[error("[ERROR: Failed to read file {path}: {reason}]")]
    FileReadFailure { path: String, reason: String },

    /// A directory directive matched nothing.
    #[error("[ERROR: No files found matching {pattern}]")]
    NoMatchingFiles { pattern: String },

    /// A datetime directive carried a format string chrono cannot render.
    #[error("[ERROR: Invalid datetime format: {format}]")]
    InvalidDatetimeFormat { format: String },

    /// A directory directive failed as a whole (bad pattern) or for one of its files.
    #[error("[ERROR: Failed to process directory {pattern}: {reason}]")]
    DirectoryReadFailure { pattern: String, reason: String },
}
