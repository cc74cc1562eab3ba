//! Credential service
//!
//! Handles signup (register a credential) and signin (verify a password).

use std::sync::Arc;

use cred_common::{KdfConfig, PasswordService};
use cred_core::{Credential, CredentialStore, DomainError, EncodedSecret};
use tracing::{info, instrument, warn};

use super::error::{CredentialError, CredentialResult};

/// Credential service
///
/// Stateless apart from its collaborators; share it behind an `Arc`.
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    passwords: PasswordService,
}

impl CredentialService {
    /// Create a new CredentialService
    pub fn new(store: Arc<dyn CredentialStore>, passwords: PasswordService) -> Self {
        Self { store, passwords }
    }

    /// Create a CredentialService with a password service built from KDF settings
    pub fn from_config(store: Arc<dyn CredentialStore>, kdf: &KdfConfig) -> CredentialResult<Self> {
        let passwords = PasswordService::new(kdf).map_err(CredentialError::Hashing)?;
        Ok(Self::new(store, passwords))
    }

    /// Get the credential store
    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    /// Register a new credential
    ///
    /// An identifier that is already taken is rejected before any hashing.
    #[instrument(skip_all, fields(identifier = %identifier))]
    pub async fn signup(&self, identifier: &str, password: &str) -> CredentialResult<Credential> {
        if !self.store.find(identifier).await?.is_empty() {
            warn!("Signup rejected: identifier already registered");
            return Err(CredentialError::DuplicateIdentifier(identifier.to_string()));
        }

        let encoded_secret = self.hash_password(password).await?;

        // The store may still report a conflict if a concurrent signup won.
        let credential = self
            .store
            .create(identifier, &encoded_secret)
            .await
            .map_err(|e| match e {
                DomainError::IdentifierAlreadyExists(id) => {
                    warn!("Signup rejected by store: identifier already registered");
                    CredentialError::DuplicateIdentifier(id)
                }
                other => CredentialError::Store(other),
            })?;

        info!(credential_id = %credential.id, "Credential registered");
        Ok(credential)
    }

    /// Verify a password and return the matching credential
    #[instrument(skip_all, fields(identifier = %identifier))]
    pub async fn signin(&self, identifier: &str, password: &str) -> CredentialResult<Credential> {
        let credential = self
            .store
            .find(identifier)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                warn!("Signin failed: identifier not found");
                CredentialError::NotFound(identifier.to_string())
            })?;

        if !self
            .verify_password(password, &credential.encoded_secret)
            .await?
        {
            warn!(credential_id = %credential.id, "Signin failed: invalid password");
            return Err(CredentialError::InvalidCredentials);
        }

        info!(credential_id = %credential.id, "Signin succeeded");
        Ok(credential)
    }

    async fn hash_password(&self, password: &str) -> CredentialResult<EncodedSecret> {
        let passwords = self.passwords.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || passwords.hash(&password))
            .await
            .map_err(|e| CredentialError::internal(format!("Hashing task failed: {e}")))?
            .map_err(CredentialError::Hashing)
    }

    async fn verify_password(
        &self,
        password: &str,
        encoded_secret: &EncodedSecret,
    ) -> CredentialResult<bool> {
        let passwords = self.passwords.clone();
        let password = password.to_owned();
        let encoded_secret = encoded_secret.clone();

        tokio::task::spawn_blocking(move || passwords.verify(&password, &encoded_secret))
            .await
            .map_err(|e| CredentialError::internal(format!("Verification task failed: {e}")))?
            .map_err(CredentialError::Hashing)
    }
}

impl std::fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialService")
            .field("store", &"dyn CredentialStore")
            .field("passwords", &self.passwords)
            .finish()
    }
}
