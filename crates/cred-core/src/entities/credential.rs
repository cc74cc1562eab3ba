//! Credential entity - an identifier and its encoded secret

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::EncodedSecret;

/// A stored credential
///
/// Serializing a credential omits the encoded secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub id: Uuid,
    pub identifier: String,
    #[serde(skip_serializing)]
    pub encoded_secret: EncodedSecret,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential with a fresh id
    pub fn new(identifier: impl Into<String>, encoded_secret: EncodedSecret) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: identifier.into(),
            encoded_secret,
            created_at: Utc::now(),
        }
    }
}
