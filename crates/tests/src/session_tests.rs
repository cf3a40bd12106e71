use std::sync::Arc;

use client::{MemoryTokenStore, SessionStatus, SessionStore, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common;

#[tokio::test]
async fn test_bearer_token_is_read_at_call_time() {
    let backend = common::backend().await;

    let _ = backend.api.admin_stats().await;
    assert_eq!(backend.log.last().authorization, None);

    backend.tokens.save("late-token");
    let _ = backend.api.admin_stats().await;
    assert_eq!(
        backend.log.last().authorization.as_deref(),
        Some("Bearer late-token")
    );

    backend.tokens.clear();
    let _ = backend.api.admin_stats().await;
    assert_eq!(backend.log.last().authorization, None);
}

#[tokio::test]
async fn test_resolve_restores_identity_from_stored_token() {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(common::doctor_token()));
    let mut store = SessionStore::new(tokens);

    let session = store.resolve().clone();
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(session.role(), Some(Role::Doctor));
    assert_eq!(store.identity().map(|i| i.name.as_str()), Some("Gregory House"));
}

#[tokio::test]
async fn test_resolve_without_token_is_anonymous() {
    let mut store = SessionStore::new(Arc::new(MemoryTokenStore::new()));
    assert_eq!(store.status(), SessionStatus::Unresolved);
    assert_eq!(store.resolve().status, SessionStatus::Anonymous);
}

#[tokio::test]
async fn test_garbage_token_is_discarded_on_resolve() {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token("garbage"));
    let mut store = SessionStore::new(tokens.clone());

    assert_eq!(store.resolve().status, SessionStatus::Anonymous);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn test_logout_clears_token_and_stops_bearer_header() {
    let backend = common::backend_with(Arc::new(MemoryTokenStore::with_token(common::doctor_token()))).await;
    let mut store = SessionStore::new(backend.tokens.clone());
    store.resolve();

    let _ = backend.api.doctor_appointments("d-7").await;
    assert!(backend.log.last().authorization.is_some());

    store.logout();
    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert_eq!(backend.tokens.load(), None);

    let _ = backend.api.doctor_appointments("d-7").await;
    assert_eq!(backend.log.last().authorization, None);
}
