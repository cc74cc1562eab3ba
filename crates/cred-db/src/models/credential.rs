//! Credential database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for credentials table
#[derive(Debug, Clone, FromRow)]
pub struct CredentialModel {
    pub id: Uuid,
    pub identifier: String,
    pub encoded_secret: String,
    pub created_at: DateTime<Utc>,
}
