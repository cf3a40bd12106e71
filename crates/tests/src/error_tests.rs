use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status_text() {
    let backend = common::backend().await;
    let err = backend
        .api
        .get::<serde_json::Value>("/broken")
        .await
        .expect_err("500 must fail");

    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "Request failed with status 500");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let backend = common::backend().await;
    let err = backend
        .api
        .get::<serde_json::Value>("/nowhere")
        .await
        .expect_err("404 must fail");
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalised() {
    let backend = common::backend().await;
    assert_eq!(backend.api.base_url(), format!("http://{}/api", backend.addr));

    let _ = backend.api.doctors().await;
    assert_eq!(backend.log.last().path, "/api/patient/doctors");
}
