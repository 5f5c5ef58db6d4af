use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use shared_types::{
    AppConfig, ForgotPasswordRequest, ForgotPasswordResponse, MessageResponse,
    ResetPasswordRequest,
};

use crate::error::ApiError;

pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";

/// The authentication backend as seen by the password reset pages.
pub trait AuthApi {
    /// `POST /api/auth/forgot-password`
    fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> impl Future<Output = Result<ForgotPasswordResponse, ApiError>>;

    /// `POST /api/auth/reset-password`
    fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
}

/// `AuthApi` over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON. Any 2xx is a success; its body is decoded
    /// leniently and falls back to `R::default()`.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::network)?;

        if !status.is_success() {
            tracing::warn!(%status, path, "auth backend rejected request");
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, path, "success body not understood, ignoring it");
            R::default()
        }))
    }
}

impl AuthApi for HttpAuthApi {
    #[tracing::instrument(skip_all)]
    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, ApiError> {
        self.post(FORGOT_PASSWORD_PATH, &request).await
    }

    #[tracing::instrument(skip_all)]
    async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(RESET_PASSWORD_PATH, &request).await
    }
}
