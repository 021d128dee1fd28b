// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Machine-distinguishable reason attached to every validation failure.
///
/// Transport layers map these onto their own status codes; the string form
/// returned by [`ValidationReason::as_str`] is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    /// Group or artifact identifier is empty or not a safe path segment.
    InvalidCoordinates,
    /// Cross-cutting library is partially filled in.
    IncompleteCrossCuttingLibrary,
    /// Cross-cutting library lacks one of the required dependency roles.
    MissingRequiredRoles,
}

impl ValidationReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCoordinates => "invalid_coordinates",
            Self::IncompleteCrossCuttingLibrary => "incomplete_cross_cutting_library",
            Self::MissingRequiredRoles => "missing_required_roles",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("{message}")]
    Validation {
        reason: ValidationReason,
        message: String,
    },

    // ========================================================================
    // Tree Construction Errors
    // ========================================================================
    #[error("Path already written in project tree: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid project tree: {0}")]
    InvalidTree(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl DomainError {
    pub(crate) fn validation(reason: ValidationReason, message: impl Into<String>) -> Self {
        Self::Validation {
            reason,
            message: message.into(),
        }
    }

    /// The validation reason code, if this is a validation failure.
    pub fn reason(&self) -> Option<ValidationReason> {
        match self {
            Self::Validation { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation {
                reason: ValidationReason::InvalidCoordinates,
                message,
            } => vec![
                format!("Details: {}", message),
                "Group ids are Java packages like 'com.example' (no hyphens or keywords)".into(),
                "Artifact ids must not contain '/', '\\' or '..'".into(),
            ],
            Self::Validation {
                reason: ValidationReason::IncompleteCrossCuttingLibrary,
                ..
            } => vec![
                "Provide groupId, name, version and at least one dependency role".into(),
                "Or omit the cross-cutting library section entirely".into(),
            ],
            Self::Validation {
                reason: ValidationReason::MissingRequiredRoles,
                message,
            } => vec![
                format!("Details: {}", message),
                "Required roles: domain, application, persistence".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' was generated twice", path),
                "This is a bug in the generator, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::InvalidSetting(_) => ErrorCategory::Validation,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::InvalidTree(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
