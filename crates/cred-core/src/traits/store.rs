//! Store trait (port) - the interface for credential persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Credential;
use crate::error::DomainError;
use crate::value_objects::EncodedSecret;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find all credentials registered under an identifier
    ///
    /// Usually zero or one; callers use the first match.
    async fn find(&self, identifier: &str) -> RepoResult<Vec<Credential>>;

    /// Create a credential
    ///
    /// Implementations that can detect a duplicate identifier return
    /// `DomainError::IdentifierAlreadyExists`.
    async fn create(
        &self,
        identifier: &str,
        encoded_secret: &EncodedSecret,
    ) -> RepoResult<Credential>;
}
