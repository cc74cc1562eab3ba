//! Service layer error types
//!
//! The three user-triggerable outcomes of signup/signin get their own
//! variants; store and hashing failures pass through unchanged.

use cred_common::AppError;
use cred_core::DomainError;

/// Credential service error type
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Signup for an identifier that already has a credential
    #[error("Identifier already registered: {0}")]
    DuplicateIdentifier(String),

    /// Signin for an identifier with no credential
    #[error("No credential found for: {0}")]
    NotFound(String),

    /// Signin with a password that does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Store failure
    #[error(transparent)]
    Store(#[from] DomainError),

    /// Key derivation failure
    #[error("Password hashing failed: {0}")]
    Hashing(#[source] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CredentialError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller caused this error and can recover from it
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentifier(_) | Self::NotFound(_) | Self::InvalidCredentials
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateIdentifier(_) => 409,
            Self::NotFound(_) => 404,
            Self::InvalidCredentials => 401,
            Self::Store(e) => {
                if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::Hashing(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifier(_) => "DUPLICATE_IDENTIFIER",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Store(e) => e.code(),
            Self::Hashing(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::DuplicateIdentifier(id) => AppError::AlreadyExists(id),
            CredentialError::NotFound(id) => AppError::NotFound(format!("credential {id}")),
            CredentialError::InvalidCredentials => AppError::InvalidCredentials,
            CredentialError::Store(e) => AppError::Domain(e),
            CredentialError::Hashing(e) => e,
            CredentialError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type CredentialResult<T> = Result<T, CredentialError>;
