use shared_types::{AppError, AuthResponse, LoginRequest, RegisterRequest};
use validator::Validate;

use crate::ApiClient;

impl ApiClient {
    /// `POST /auth/login`.
    #[tracing::instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;
        let response: AuthResponse = self.post_json("/auth/login", request).await?;
        tracing::info!(role = %response.role, "Login accepted");
        Ok(response)
    }

    /// `POST /auth/register`. Fields belonging to the other role are dropped
    /// before sending.
    #[tracing::instrument(skip_all, fields(email = %request.email, role = request.role.as_str()))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        let request = request.clone().normalized();
        request.check()?;
        let response: AuthResponse = self.post_json("/auth/register", &request).await?;
        tracing::info!("Registration accepted");
        Ok(response)
    }
}
