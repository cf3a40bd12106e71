use shared_types::{AppError, Appointment, AppointmentStatus, StatusUpdateQuery};

use crate::ApiClient;

impl ApiClient {
    /// All appointments assigned to a doctor, in backend order.
    #[tracing::instrument(skip(self))]
    pub async fn doctor_appointments(&self, doctor_id: &str) -> Result<Vec<Appointment>, AppError> {
        self.get(&format!("/doctor/{doctor_id}/appointments")).await
    }

    /// `PUT /doctor/appointments/{id}/status?status=&notes=`.
    #[tracing::instrument(skip(self, notes))]
    pub async fn update_appointment_status(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
        notes: Option<String>,
    ) -> Result<(), AppError> {
        let query = StatusUpdateQuery {
            status: status.as_str().to_string(),
            notes: notes.filter(|n| !n.trim().is_empty()),
        };
        self.put_query(&format!("/doctor/appointments/{appointment_id}/status"), &query)
            .await?;
        tracing::info!(appointment_id, status = status.as_str(), "Appointment status updated");
        Ok(())
    }
}
