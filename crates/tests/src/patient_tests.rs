use client::{list_state, FetchState};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, BookAppointmentRequest, UploadRecordRequest};

use crate::common;

#[tokio::test]
async fn test_doctor_directory() {
    let backend = common::backend().await;
    let doctors = backend.api.doctors().await.expect("directory should load");
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].name(), "Gregory House");
    assert_eq!(doctors[0].experience, Some(20));
}

#[tokio::test]
async fn test_booking_posts_camel_case_body() {
    let backend = common::backend().await;
    let request = BookAppointmentRequest {
        doctor_id: Some("d-7".into()),
        date: "2026-04-10T14:30".into(),
        notes: "Follow-up".into(),
    };

    let confirmation = backend
        .api
        .book_appointment("p-1", &request)
        .await
        .expect("booking should succeed");
    assert!(confirmation.success);
    assert_eq!(confirmation.appointment_id.as_deref(), Some("ap-99"));

    let req = backend.log.last();
    assert_eq!(req.path, "/api/patient/p-1/book");
    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["doctorId"], "d-7");
    assert_eq!(body["date"], "2026-04-10T14:30");
}

#[tokio::test]
async fn test_booking_without_date_makes_no_request() {
    let backend = common::backend().await;
    let request = BookAppointmentRequest {
        doctor_id: Some("d-7".into()),
        date: String::new(),
        notes: String::new(),
    };

    let err = backend
        .api
        .book_appointment("p-1", &request)
        .await
        .expect_err("must be blocked");
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("date").is_some());
    assert_eq!(backend.log.len(), 0);
}

#[tokio::test]
async fn test_booking_without_doctor_makes_no_request() {
    let backend = common::backend().await;
    let request = BookAppointmentRequest {
        doctor_id: None,
        date: "2026-04-10T14:30".into(),
        notes: String::new(),
    };

    let err = backend
        .api
        .book_appointment("p-1", &request)
        .await
        .expect_err("must be blocked");
    assert_eq!(
        err.field("doctor_id"),
        Some("Please select a specialist from the list.")
    );
    assert_eq!(backend.log.len(), 0);
}

#[tokio::test]
async fn test_upload_record_sends_metadata_in_query() {
    let backend = common::backend().await;
    let request = UploadRecordRequest {
        file_url: "https://files.test/scan.pdf".into(),
        description: "Chest scan".into(),
    };

    let record = backend
        .api
        .upload_record("p-1", &request)
        .await
        .expect("upload should succeed");
    assert_eq!(record.title(), "Chest scan");
    assert_eq!(record.file_url, "https://files.test/scan.pdf");

    let req = backend.log.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/patient/p-1/records");
    assert_eq!(
        req.query.as_deref(),
        Some("fileUrl=https%3A%2F%2Ffiles.test%2Fscan.pdf&description=Chest+scan")
    );
}

#[tokio::test]
async fn test_upload_with_bad_link_is_rejected_locally() {
    let backend = common::backend().await;
    let request = UploadRecordRequest {
        file_url: "not a link".into(),
        description: "Chest scan".into(),
    };

    let err = backend
        .api
        .upload_record("p-1", &request)
        .await
        .expect_err("must be rejected");
    assert!(err.field("file_url").is_some());
    assert_eq!(backend.log.len(), 0);
}

#[tokio::test]
async fn test_records_list_and_missing_records_read_as_empty() {
    let backend = common::backend().await;

    let records = backend.api.medical_records("p-1").await.expect("records should load");
    assert_eq!(records[0].title(), "Blood test");

    let state = list_state(backend.api.medical_records("p-new").await);
    assert_eq!(state, FetchState::Ready(Vec::new()));
}
