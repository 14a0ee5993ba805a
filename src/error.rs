//! Error types for safeview operations.
//!
//! This module defines [`SafeviewError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SafeviewError` for failures that abort the run
//! - Malformed input lines are not errors; they are reported as
//!   [`crate::records::ParseError`] values inside a parse result
//! - Use `anyhow::Error` (via `SafeviewError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for safeview operations.
#[derive(Debug, Error)]
pub enum SafeviewError {
    /// Input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backup could not be written or does not match the source.
    #[error("Backup to {path} failed: {message}")]
    BackupFailed { path: PathBuf, message: String },

    /// Operator aborted the secret prompt.
    #[error("Secret entry cancelled")]
    PromptCancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for safeview operations.
pub type Result<T> = std::result::Result<T, SafeviewError>;
