use std::sync::Arc;

use client::MemoryTokenStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

use crate::common;

async fn signed_in() -> common::Backend {
    common::backend_with(Arc::new(MemoryTokenStore::with_token("admin-token"))).await
}

#[tokio::test]
async fn test_stats_accept_total_prefixed_fields() {
    let backend = signed_in().await;
    let stats = backend.api.admin_stats().await.expect("stats should load");

    assert_eq!(stats.users, 12);
    assert_eq!(stats.doctors, 3);
    assert_eq!(stats.patients, 8);
    assert_eq!(stats.appointments, 20);

    let admins = stats
        .role_breakdown()
        .into_iter()
        .find(|share| share.role == Role::Admin)
        .map(|share| share.count);
    assert_eq!(admins, Some(1));
}

#[tokio::test]
async fn test_stats_without_token_is_unauthorized() {
    let backend = common::backend().await;
    let err = backend.api.admin_stats().await.expect_err("must be rejected");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_users_list() {
    let backend = signed_in().await;
    let users = backend.api.admin_users().await.expect("users should load");
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].role, "DOCTOR");
    assert_eq!(backend.log.last().path, "/api/admin/users");
}

#[tokio::test]
async fn test_delete_user_sends_delete_and_accepts_no_content() {
    let backend = signed_in().await;
    backend.api.delete_user("d-7").await.expect("delete should succeed");

    let req = backend.log.last();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/admin/users/d-7");
    assert_eq!(req.authorization.as_deref(), Some("Bearer admin-token"));
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let backend = signed_in().await;
    let err = backend.api.delete_user("missing").await.expect_err("must fail");
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
