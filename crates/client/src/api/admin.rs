use shared_types::{AppError, DashboardStats, UserAccount};

use crate::ApiClient;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn admin_stats(&self) -> Result<DashboardStats, AppError> {
        self.get("/admin/stats").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn admin_users(&self) -> Result<Vec<UserAccount>, AppError> {
        self.get("/admin/users").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        self.delete(&format!("/admin/users/{user_id}")).await?;
        tracing::info!(user_id, "User deleted");
        Ok(())
    }
}
