use client::SessionStore;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, Role};

use crate::common;

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_success_authenticates_session() {
    let backend = common::backend().await;
    let mut store = SessionStore::new(backend.tokens.clone());

    let response = backend
        .api
        .login(&credentials(common::DOCTOR_EMAIL, common::PASSWORD))
        .await
        .expect("login should succeed");
    let role = store.accept(response).expect("response should be usable");

    assert_eq!(role, Role::Doctor);
    assert_eq!(store.identity().map(|i| i.id.as_str()), Some("d-7"));
    assert_eq!(backend.tokens.load(), Some(common::doctor_token()));
}

#[tokio::test]
async fn test_login_rejected_leaves_session_anonymous() {
    let backend = common::backend().await;
    let mut store = SessionStore::new(backend.tokens.clone());
    store.resolve();

    let err = backend
        .api
        .login(&credentials(common::DOCTOR_EMAIL, "wrong-password"))
        .await
        .expect_err("wrong password must fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(store.identity().is_none());
    assert_eq!(backend.tokens.load(), None);
}

#[tokio::test]
async fn test_login_with_malformed_email_never_reaches_backend() {
    let backend = common::backend().await;

    let err = backend
        .api
        .login(&credentials("not-an-email", common::PASSWORD))
        .await
        .expect_err("validation must fail");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("email").is_some());
    assert_eq!(backend.log.len(), 0);
}

#[tokio::test]
async fn test_login_sends_json_body_to_auth_endpoint() {
    let backend = common::backend().await;
    let _ = backend
        .api
        .login(&credentials(common::DOCTOR_EMAIL, common::PASSWORD))
        .await;

    let req = backend.log.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/auth/login");
    assert_eq!(req.authorization, None);
    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["email"], common::DOCTOR_EMAIL);
}

#[tokio::test]
async fn test_register_patient_drops_doctor_fields() {
    let backend = common::backend().await;
    let request = RegisterRequest {
        name: "Jane Roe".into(),
        email: "jane@mail.test".into(),
        password: "secret1".into(),
        role: Role::Patient,
        specialization: Some("Cardiology".into()),
        experience: Some(4),
        dob: Some("1990-05-01".into()),
        blood_group: Some("O+".into()),
    };

    let response = backend.api.register(&request).await.expect("register should succeed");
    assert_eq!(response.role, "PATIENT");

    let body: serde_json::Value = serde_json::from_str(&backend.log.last().body).unwrap();
    assert_eq!(body["role"], "PATIENT");
    assert_eq!(body["bloodGroup"], "O+");
    assert!(body.get("specialization").is_none());
    assert!(body.get("experience").is_none());
}

#[tokio::test]
async fn test_register_doctor_without_specialization_is_blocked() {
    let backend = common::backend().await;
    let request = RegisterRequest {
        name: "Sam Neill".into(),
        email: "sam@clinic.test".into(),
        password: "secret1".into(),
        role: Role::Doctor,
        specialization: None,
        experience: Some(3),
        dob: None,
        blood_group: None,
    };

    let err = backend.api.register(&request).await.expect_err("must be rejected");
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("specialization").is_some());
    assert_eq!(backend.log.len(), 0);
}
