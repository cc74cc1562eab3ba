//! # cred-db
//!
//! Storage layer implementing `CredentialStore`.
//!
//! ## Overview
//!
//! - `PgCredentialStore`: PostgreSQL via SQLx, identifier uniqueness enforced by the schema
//! - `InMemoryCredentialStore`: `DashMap`-backed store for tests and embedding
//! - Connection pool management and schema setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cred_db::{create_pool_from_env, run_migrations, PgCredentialStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let Some(pool) = create_pool_from_env().await? else {
//!         return Ok(()); // no DATABASE_URL: use InMemoryCredentialStore instead
//!     };
//!     run_migrations(&pool).await?;
//!     let store = PgCredentialStore::new(pool);
//!
//!     // Hand the store to a CredentialService...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, create_pool_with, run_migrations, PgPool, PoolError,
    PoolTimeouts,
};
pub use repositories::{InMemoryCredentialStore, PgCredentialStore};
