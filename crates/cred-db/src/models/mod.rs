//! Database models - SQLx-compatible structs for PostgreSQL tables

mod credential;

pub use credential::CredentialModel;
