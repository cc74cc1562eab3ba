//! Test helpers for integration tests
//!
//! Builds a `CredentialService` over either store, with cheap KDF settings.

use std::sync::Arc;

use anyhow::Result;
use cred_common::{try_init_tracing_with_config, AppConfig, KdfConfig, TracingConfig};
use cred_db::{create_pool, run_migrations, InMemoryCredentialStore, PgCredentialStore};
use cred_service::CredentialService;

/// Service wired to an in-memory store
pub struct TestContext {
    pub service: CredentialService,
    pub store: Arc<InMemoryCredentialStore>,
}

impl TestContext {
    /// Build a service over a fresh in-memory store
    pub fn in_memory() -> Result<Self> {
        init_test_tracing();
        let store = InMemoryCredentialStore::new_shared();
        let service = CredentialService::from_config(store.clone(), &KdfConfig::low_cost())?;
        Ok(Self { service, store })
    }
}

/// Build a service over PostgreSQL, or `None` when `DATABASE_URL` is unset
pub async fn postgres_service() -> Result<Option<CredentialService>> {
    init_test_tracing();
    let config = test_config()?;
    let Some(database) = config.database.as_ref() else {
        return Ok(None);
    };

    let pool = create_pool(database).await?;
    run_migrations(&pool).await?;

    let store = Arc::new(PgCredentialStore::new(pool));
    Ok(Some(CredentialService::from_config(store, &config.kdf)?))
}

/// Create a test configuration
///
/// Environment settings are honored except for the KDF cost, which is
/// lowered to keep the suite fast.
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    config.kdf = KdfConfig::low_cost();

    Ok(config)
}

/// Helper to check if the database-backed tests can run
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Install a debug subscriber once per test binary
pub fn init_test_tracing() {
    // Another test in this binary may have installed it already.
    let _ = try_init_tracing_with_config(&TracingConfig::development());
}
