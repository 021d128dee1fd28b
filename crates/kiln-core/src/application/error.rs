//! Application layer errors.
//!
//! These errors represent failures in orchestration and infrastructure, not
//! business rules. Business rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Ephemeral tree creation or write failed.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// A generated path was written twice on the ephemeral root.
    #[error("Refusing to overwrite {path}")]
    AlreadyWritten { path: PathBuf },

    /// Compression failed mid-stream.
    #[error("Archive error: {reason}")]
    Archive { reason: String },

    /// The ephemeral root could not be removed.
    #[error("Cleanup failed for {path}: {reason}")]
    Cleanup { path: PathBuf, reason: String },

    /// Dependency catalog could not be read.
    #[error("Dependency catalog error: {reason}")]
    Catalog { reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Storage { path, .. } | Self::AlreadyWritten { path } => vec![
                format!("Failed to write under: {}", path.display()),
                "Check that the temporary directory is writable".into(),
                "Check available disk space".into(),
            ],
            Self::Archive { .. } => vec![
                "Packaging the project failed; no archive was produced".into(),
                "Try again, the failure is usually transient".into(),
            ],
            Self::Cleanup { path, .. } => vec![
                format!("A temporary directory was left behind: {}", path.display()),
                "It is safe to delete it by hand".into(),
            ],
            Self::Catalog { .. } => vec![
                "Check the catalog file referenced in your configuration".into(),
                "Each [[dependency]] needs id, group_id and artifact_id".into(),
            ],
            Self::StoreLockError => vec![
                "An adapter lock was poisoned by an earlier panic".into(),
                "Restart the process".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Storage { .. }
            | Self::AlreadyWritten { .. }
            | Self::Archive { .. }
            | Self::Cleanup { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
            Self::Catalog { .. } => ErrorCategory::Configuration,
        }
    }

    /// Infrastructure failures that a caller may choose to retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Storage { .. } | Self::Archive { .. } | Self::Cleanup { .. }
        )
    }
}
