//! Unified error types for DAO operations.

use thiserror::Error;

/// An underlying cause carried by a [`StrataError`].
///
/// Exposed through [`std::error::Error::source`] so callers can walk the
/// chain down to whatever the backing store reported.
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure kinds surfaced by DAO operations.
///
/// Every variant is a normal, recoverable outcome the caller must handle;
/// there is no fatal class. Each carries a human-readable message and an
/// optional underlying cause.
#[derive(Error, Debug)]
pub enum StrataError {
    /// The requested identifier had no corresponding entry at the time of
    /// the check.
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },

    /// The requested operation has no implementation in this DAO
    /// configuration.
    #[error("Unsupported: {message}")]
    Unsupported {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },

    /// The value or partial value supplied to a mutating operation failed
    /// backend-defined validation.
    #[error("Invalid value: {message}")]
    InvalidValue {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },
}

impl StrataError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an unsupported-operation error.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches an underlying cause, replacing any previous one.
    #[must_use]
    pub fn with_cause(self, cause: impl Into<ErrorCause>) -> Self {
        match self {
            Self::NotFound { message, .. } => Self::NotFound {
                message,
                cause: Some(cause.into()),
            },
            Self::Unsupported { message, .. } => Self::Unsupported {
                message,
                cause: Some(cause.into()),
            },
            Self::InvalidValue { message, .. } => Self::InvalidValue {
                message,
                cause: Some(cause.into()),
            },
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Unsupported { message, .. }
            | Self::InvalidValue { message, .. } => message,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unsupported { .. } => "UNSUPPORTED",
            Self::InvalidValue { .. } => "INVALID_VALUE",
        }
    }

    /// Returns true if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is an unsupported-operation error.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Returns true if this is an invalid-value error.
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
