//! In-memory implementation of CredentialStore
//!
//! Uses `DashMap` keyed by identifier; the entry API makes the
//! uniqueness check and the insert a single step.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;

use cred_core::{Credential, CredentialStore, DomainError, EncodedSecret, RepoResult};

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: Arc<DashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of stored credentials
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    #[instrument(skip(self))]
    async fn find(&self, identifier: &str) -> RepoResult<Vec<Credential>> {
        Ok(self
            .credentials
            .get(identifier)
            .map(|entry| vec![entry.value().clone()])
            .unwrap_or_default())
    }

    #[instrument(skip(self, encoded_secret))]
    async fn create(
        &self,
        identifier: &str,
        encoded_secret: &EncodedSecret,
    ) -> RepoResult<Credential> {
        match self.credentials.entry(identifier.to_string()) {
            Entry::Occupied(_) => Err(DomainError::IdentifierAlreadyExists(
                identifier.to_string(),
            )),
            Entry::Vacant(slot) => {
                let credential = Credential::new(identifier, encoded_secret.clone());
                slot.insert(credential.clone());
                tracing::debug!(credential_id = %credential.id, "Credential stored");
                Ok(credential)
            }
        }
    }
}
