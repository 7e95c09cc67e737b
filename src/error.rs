//! Error types for pipsync operations.
//!
//! This module defines [`PipsyncError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal setup errors (requirements file unreadable, pip unavailable)
//!   propagate and terminate the run with a non-zero exit code
//! - Individual package install failures in per-package mode are data
//!   (`InstallReport::failed`), not errors
//! - Use `anyhow::Error` (via `PipsyncError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pipsync operations.
#[derive(Debug, Error)]
pub enum PipsyncError {
    /// Requirements file not found at the configured path.
    #[error("Requirements file not found: {path}")]
    RequirementsNotFound { path: PathBuf },

    /// Requirements file exists but could not be read.
    #[error("Failed to read requirements at {path}: {source}")]
    RequirementsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configured pip command is empty or unusable.
    #[error("Invalid pip command: {message}")]
    InvalidPipCommand { message: String },

    /// Listing installed packages failed (pip missing or exited non-zero).
    #[error("Failed to list installed packages via '{command}': {message}")]
    ListInstalledFailed { command: String, message: String },

    /// An external command could not be run or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Batch install exited non-zero; no per-package attribution exists.
    #[error("Batch install failed with exit code {code:?}")]
    BatchInstallFailed { code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipsync operations.
pub type Result<T> = std::result::Result<T, PipsyncError>;
