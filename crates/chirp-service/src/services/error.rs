//! Service layer error types
//!
//! Provides a unified error type for all service operations. Callers can
//! tell "nothing to do" (`NotFound`) apart from "data may be inconsistent"
//! (`PartialCascadeFailure`) without inspecting messages.

use chirp_common::error::{GONE_MESSAGE, RETRY_MESSAGE};
use chirp_common::AppError;
use chirp_core::{CascadeStep, DomainError, EntityId};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    Domain(DomainError),

    /// Application error
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// The viewer may not perform this operation
    PermissionDenied { action: &'static str },

    /// The operation needs an authenticated viewer and got none
    InvalidViewerContext { operation: &'static str },

    /// Some cascade steps still failed after every retry; the store may hold
    /// rows referencing a deleted tweet
    PartialCascadeFailure {
        tweet_id: EntityId,
        failed_steps: Vec<CascadeStep>,
    },

    /// The caller's deadline passed before the operation finished
    DeadlineExceeded,

    /// Validation error
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::PermissionDenied { action } => write!(f, "Not allowed to {action}"),
            Self::InvalidViewerContext { operation } => {
                write!(f, "{operation} requires an authenticated viewer")
            }
            Self::PartialCascadeFailure {
                tweet_id,
                failed_steps,
            } => {
                let steps: Vec<String> = failed_steps.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Cascade for tweet {tweet_id} incomplete; failed steps: {}",
                    steps.join(", ")
                )
            }
            Self::DeadlineExceeded => write!(f, "Deadline exceeded"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(action: &'static str) -> Self {
        Self::PermissionDenied { action }
    }

    /// Create an invalid viewer context error
    pub fn invalid_viewer(operation: &'static str) -> Self {
        Self::InvalidViewerContext { operation }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error means the requested entity does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Domain(e) => e.is_not_found(),
            Self::App(e) => e.status_code() == 404,
            _ => false,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
            Self::DeadlineExceeded => 504,
            Self::InvalidViewerContext { .. }
            | Self::PartialCascadeFailure { .. }
            | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::InvalidViewerContext { .. } => "INVALID_VIEWER_CONTEXT",
            Self::PartialCascadeFailure { .. } => "PARTIAL_CASCADE_FAILURE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Text safe to show an end user. Store details never appear here.
    pub fn user_message(&self) -> String {
        if self.is_not_found() {
            return GONE_MESSAGE.to_string();
        }
        match self {
            Self::PermissionDenied { .. } | Self::Validation(_) => self.to_string(),
            _ if self.status_code() < 500 => self.to_string(),
            _ => RETRY_MESSAGE.to_string(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::PermissionDenied { .. } => AppError::InsufficientPermissions,
            ServiceError::InvalidViewerContext { operation } => {
                AppError::Internal(anyhow::anyhow!("{operation} called without a viewer"))
            }
            err @ ServiceError::PartialCascadeFailure { .. } => {
                AppError::Inconsistent(err.to_string())
            }
            ServiceError::DeadlineExceeded => AppError::Timeout,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
