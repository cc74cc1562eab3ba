//! Business logic services

pub mod credential;
pub mod error;

pub use credential::CredentialService;
pub use error::{CredentialError, CredentialResult};
