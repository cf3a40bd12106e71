use shared_types::{
    AppError, Appointment, BookAppointmentRequest, BookingConfirmation, Doctor, MedicalRecord,
    UploadRecordRequest,
};
use validator::Validate;

use crate::ApiClient;

impl ApiClient {
    /// Doctor directory shown on the booking form.
    #[tracing::instrument(skip(self))]
    pub async fn doctors(&self) -> Result<Vec<Doctor>, AppError> {
        self.get("/patient/doctors").await
    }

    /// `POST /patient/{id}/book`. Incomplete requests are rejected locally.
    #[tracing::instrument(skip(self, request))]
    pub async fn book_appointment(
        &self,
        patient_id: &str,
        request: &BookAppointmentRequest,
    ) -> Result<BookingConfirmation, AppError> {
        if let Err(errors) = request.validate() {
            tracing::debug!("Booking blocked before dispatch");
            return Err(errors.into());
        }
        let confirmation: BookingConfirmation = self
            .post_json(&format!("/patient/{patient_id}/book"), request)
            .await?;
        tracing::info!(appointment_id = ?confirmation.appointment_id, "Appointment booked");
        Ok(confirmation)
    }

    #[tracing::instrument(skip(self))]
    pub async fn patient_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, AppError> {
        self.get(&format!("/patient/{patient_id}/appointments")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn medical_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, AppError> {
        self.get(&format!("/patient/{patient_id}/records")).await
    }

    /// Register a document by link. The metadata travels in the query string.
    #[tracing::instrument(skip(self, request))]
    pub async fn upload_record(
        &self,
        patient_id: &str,
        request: &UploadRecordRequest,
    ) -> Result<MedicalRecord, AppError> {
        request.validate()?;
        self.post_query(&format!("/patient/{patient_id}/records"), request)
            .await
    }
}
