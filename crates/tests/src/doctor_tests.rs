use pretty_assertions::assert_eq;
use shared_types::{pending, recent_history, with_status, AppointmentStatus};

use crate::common;

#[tokio::test]
async fn test_appointments_decode_nested_people() {
    let backend = common::backend().await;
    let list = backend.api.doctor_appointments("d-7").await.expect("list should load");

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].patient_name(), "Jane Roe");
    assert_eq!(list[0].patient.as_ref().and_then(|p| p.blood_group.as_deref()), Some("O+"));
    assert_eq!(list[1].doctor_name(), "Unassigned");
    assert_eq!(backend.log.last().path, "/api/doctor/d-7/appointments");
}

#[tokio::test]
async fn test_status_update_uses_query_parameters() {
    let backend = common::backend().await;
    backend
        .api
        .update_appointment_status("ap-1", AppointmentStatus::Completed, Some("All clear".into()))
        .await
        .expect("update should succeed");

    let req = backend.log.last();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/doctor/appointments/ap-1/status");
    assert_eq!(req.query.as_deref(), Some("status=COMPLETED&notes=All+clear"));
    assert_eq!(req.body, "");
}

#[tokio::test]
async fn test_status_update_omits_blank_notes() {
    let backend = common::backend().await;
    backend
        .api
        .update_appointment_status("ap-1", AppointmentStatus::Cancelled, Some("  ".into()))
        .await
        .expect("update should succeed");

    assert_eq!(backend.log.last().query.as_deref(), Some("status=CANCELLED"));
}

#[tokio::test]
async fn test_accept_then_local_update_moves_row_to_history() {
    let backend = common::backend().await;
    let list = backend.api.doctor_appointments("d-7").await.unwrap();
    assert_eq!(pending(&list).len(), 1);

    backend
        .api
        .update_appointment_status("ap-1", AppointmentStatus::Completed, None)
        .await
        .unwrap();
    let list = with_status(&list, "ap-1", AppointmentStatus::Completed);

    assert!(pending(&list).is_empty());
    assert_eq!(recent_history(&list, 4).len(), 2);
}
