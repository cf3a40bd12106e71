use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

use crate::storage::TokenStore;

/// Thin wrapper over `reqwest` that knows the backend root and attaches the
/// stored bearer token.
///
/// The token is read from the store on every request, never cached, so a
/// login or logout takes effect on the very next call.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            tokens,
        }
    }

    /// Client for the configured base URL and the platform token store.
    pub fn from_config() -> Self {
        Self::new(
            crate::config::load_config().api.base_url.clone(),
            crate::storage::default_store(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this client reads credentials from.
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.tokens)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.load() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(self.request(Method::GET, path), path).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body), path)
            .await
    }

    /// POST with parameters in the query string and no body.
    pub async fn post_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).query(query), path)
            .await
    }

    /// PUT with parameters in the query string. The response body is ignored.
    pub async fn put_query<Q>(&self, path: &str, query: &Q) -> Result<(), AppError>
    where
        Q: Serialize + ?Sized,
    {
        self.execute_unit(self.request(Method::PUT, path).query(query), path)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.execute_unit(self.request(Method::DELETE, path), path)
            .await
    }

    async fn dispatch(&self, builder: RequestBuilder, path: &str) -> Result<String, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, path, "Request did not reach the backend");
            AppError::transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), path, kind = %err.kind, "Backend rejected request");
            return Err(err);
        }
        Ok(body)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, AppError> {
        let body = self.dispatch(builder, path).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, path, "Unexpected response shape");
            AppError::decode(format!("Unexpected response from {path}: {e}"))
        })
    }

    async fn execute_unit(&self, builder: RequestBuilder, path: &str) -> Result<(), AppError> {
        self.dispatch(builder, path).await.map(|_| ())
    }
}
