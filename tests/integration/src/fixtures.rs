//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Includes the process start time so reruns against a persistent database
/// do not collide.
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{epoch}_{n}")
}

/// Identifier and password pair
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub identifier: String,
    pub password: String,
}

impl TestAccount {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            identifier: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }

    pub fn with_password(password: &str) -> Self {
        Self {
            password: password.to_string(),
            ..Self::unique()
        }
    }

    /// A password guaranteed to differ from this account's
    pub fn wrong_password(&self) -> String {
        format!("{}-wrong", self.password)
    }
}
