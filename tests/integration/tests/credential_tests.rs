//! Credential service integration tests
//!
//! The in-memory tests always run. The PostgreSQL tests require
//! `DATABASE_URL` and skip otherwise.
//!
//! Run with: cargo test -p integration-tests --test credential_tests

use std::sync::Arc;

use cred_core::CredentialStore;
use cred_service::CredentialError;
use integration_tests::{check_test_env, fixtures::*, postgres_service, TestContext};

fn is_secret_layout(secret: &str) -> bool {
    let Some((salt, key)) = secret.split_once('.') else {
        return false;
    };
    let hex = |s: &str| !s.is_empty() && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
    hex(salt) && hex(key)
}

// ============================================================================
// In-memory store
// ============================================================================

#[tokio::test]
async fn test_signup_then_signin() {
    let ctx = TestContext::in_memory().unwrap();
    let account = TestAccount::unique();

    let created = ctx
        .service
        .signup(&account.identifier, &account.password)
        .await
        .unwrap();
    let signed_in = ctx
        .service
        .signin(&account.identifier, &account.password)
        .await
        .unwrap();

    assert_eq!(signed_in.identifier, account.identifier);
    assert_eq!(signed_in.id, created.id);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn test_stored_secret_is_never_the_password() {
    let ctx = TestContext::in_memory().unwrap();
    let account = TestAccount::with_password("hunter2");

    ctx.service
        .signup(&account.identifier, &account.password)
        .await
        .unwrap();

    let stored = ctx.store.find(&account.identifier).await.unwrap();
    let secret = stored[0].encoded_secret.as_str();
    assert_ne!(secret, account.password);
    assert!(!secret.contains(&account.password));
    assert!(is_secret_layout(secret));
    assert_eq!(secret.matches('.').count(), 1);
}

#[tokio::test]
async fn test_scenario() {
    let ctx = TestContext::in_memory().unwrap();
    let service = &ctx.service;

    let credential = service.signup("a@x.com", "pw1").await.unwrap();
    assert_ne!(credential.encoded_secret.as_str(), "pw1");
    assert!(is_secret_layout(credential.encoded_secret.as_str()));

    let signed_in = service.signin("a@x.com", "pw1").await.unwrap();
    assert_eq!(signed_in.identifier, "a@x.com");

    assert!(matches!(
        service.signin("a@x.com", "wrong").await,
        Err(CredentialError::InvalidCredentials)
    ));
    assert!(matches!(
        service.signup("a@x.com", "pw2").await,
        Err(CredentialError::DuplicateIdentifier(_))
    ));
    assert!(matches!(
        service.signin("nobody@x.com", "pw").await,
        Err(CredentialError::NotFound(_))
    ));

    // The rejected signup did not replace the original secret
    assert!(service.signin("a@x.com", "pw1").await.is_ok());
    assert!(service.signin("a@x.com", "pw2").await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signups_for_same_identifier() {
    let ctx = TestContext::in_memory().unwrap();
    let service = Arc::new(ctx.service);
    let account = TestAccount::unique();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            let identifier = account.identifier.clone();
            tokio::spawn(async move { service.signup(&identifier, &format!("pw{i}")).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(CredentialError::DuplicateIdentifier(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signins() {
    let ctx = TestContext::in_memory().unwrap();
    let service = Arc::new(ctx.service);
    let account = TestAccount::unique();
    service
        .signup(&account.identifier, &account.password)
        .await
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            let account = account.clone();
            tokio::spawn(async move {
                let password = if i % 2 == 0 {
                    account.password.clone()
                } else {
                    account.wrong_password()
                };
                (i, service.signin(&account.identifier, &password).await)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        if i % 2 == 0 {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(CredentialError::InvalidCredentials)));
        }
    }
}

// ============================================================================
// PostgreSQL store
// ============================================================================

#[tokio::test]
async fn test_postgres_signup_then_signin() {
    if !check_test_env() {
        return;
    }

    let service = postgres_service()
        .await
        .expect("Failed to connect")
        .expect("DATABASE_URL is set");
    let account = TestAccount::unique();

    service
        .signup(&account.identifier, &account.password)
        .await
        .unwrap();
    let signed_in = service
        .signin(&account.identifier, &account.password)
        .await
        .unwrap();
    assert_eq!(signed_in.identifier, account.identifier);

    assert!(matches!(
        service.signin(&account.identifier, &account.wrong_password()).await,
        Err(CredentialError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_postgres_duplicate_signup() {
    if !check_test_env() {
        return;
    }

    let service = postgres_service()
        .await
        .expect("Failed to connect")
        .expect("DATABASE_URL is set");
    let account = TestAccount::unique();

    service
        .signup(&account.identifier, &account.password)
        .await
        .unwrap();
    let result = service.signup(&account.identifier, "other").await;

    assert!(matches!(result, Err(CredentialError::DuplicateIdentifier(_))));
}

#[tokio::test]
async fn test_postgres_unknown_identifier() {
    if !check_test_env() {
        return;
    }

    let service = postgres_service()
        .await
        .expect("Failed to connect")
        .expect("DATABASE_URL is set");

    let result = service.signin(&TestAccount::unique().identifier, "pw").await;
    assert!(matches!(result, Err(CredentialError::NotFound(_))));
}
