//! Credential entity <-> model mapper

use cred_core::{Credential, EncodedSecret};

use crate::models::CredentialModel;

/// Convert CredentialModel to Credential entity
impl From<CredentialModel> for Credential {
    fn from(model: CredentialModel) -> Self {
        Credential {
            id: model.id,
            identifier: model.identifier,
            encoded_secret: EncodedSecret::from_stored(model.encoded_secret),
            created_at: model.created_at,
        }
    }
}
