//! # cred-service
//!
//! Application layer: registers credentials and verifies signins against an
//! injected `CredentialStore`.

pub mod services;

pub use services::{CredentialError, CredentialResult, CredentialService};
