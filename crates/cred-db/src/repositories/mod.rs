//! Store implementations
//!
//! Implementations of the `CredentialStore` trait defined in cred-core.

mod credential;
mod error;
mod memory;

pub use credential::PgCredentialStore;
pub use memory::InMemoryCredentialStore;
