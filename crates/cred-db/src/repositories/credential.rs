//! PostgreSQL implementation of CredentialStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cred_core::{Credential, CredentialStore, DomainError, EncodedSecret, RepoResult};

use crate::models::CredentialModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CredentialStore
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Create a new PgCredentialStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip(self))]
    async fn find(&self, identifier: &str) -> RepoResult<Vec<Credential>> {
        let rows = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT id, identifier, encoded_secret, created_at
            FROM credentials
            WHERE identifier = $1
            ORDER BY created_at
            ",
        )
        .bind(identifier)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Credential::from).collect())
    }

    #[instrument(skip(self, encoded_secret))]
    async fn create(
        &self,
        identifier: &str,
        encoded_secret: &EncodedSecret,
    ) -> RepoResult<Credential> {
        let row = sqlx::query_as::<_, CredentialModel>(
            r"
            INSERT INTO credentials (id, identifier, encoded_secret)
            VALUES ($1, $2, $3)
            RETURNING id, identifier, encoded_secret, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(identifier)
        .bind(encoded_secret.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::IdentifierAlreadyExists(identifier.to_string())
            })
        })?;

        Ok(Credential::from(row))
    }
}
