//! Unified error handling for Kiln Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ValidationReason};

/// Root error type for Kiln Core operations.
///
/// This enum wraps all possible errors that can occur when using kiln-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum KilnError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl KilnError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The validation reason code, when the request was rejected.
    pub fn validation_reason(&self) -> Option<ValidationReason> {
        match self {
            Self::Domain(e) => e.reason(),
            _ => None,
        }
    }

    /// Check if this error is a transient infrastructure failure.
    ///
    /// Kiln never retries on its own; this only informs the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_transient())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type KilnResult<T> = Result<T, KilnError>;
