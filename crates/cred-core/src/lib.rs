//! # cred-core
//!
//! Domain layer containing the credential entity, the encoded secret value object,
//! and the store trait the service depends on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Credential;
pub use error::DomainError;
pub use traits::{CredentialStore, RepoResult};
pub use value_objects::{EncodedSecret, SECRET_SEPARATOR};
