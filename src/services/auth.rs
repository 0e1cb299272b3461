use validator::Validate;

use crate::models::LoginRequest;
use crate::services::client::{ApiClient, ApiError};

impl ApiClient {
    /// Log in with a name and email; the service answers with a session cookie
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(format!("Invalid login: {}", e)))?;

        self.post("/auth/login", Some(request)).await?;
        tracing::info!("Logged in as {}", request.name);
        Ok(())
    }

    /// End the current session
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.post::<()>("/auth/logout", None).await?;
        tracing::info!("Logout successful ({})", response.status());
        Ok(())
    }

    /// Probe whether the session cookie is still accepted
    ///
    /// Any failure, including transport errors, counts as not authenticated.
    pub async fn check_auth(&self) -> bool {
        match self.get("/dogs/breeds").await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::warn!("Authentication check failed: {}", e);
                false
            }
        }
    }
}
