//! Backend client
//!
//! [`ApiClient`] owns the transport and the [`SessionContext`]; every request
//! it sends carries the bearer token when one is stored. Status handling is
//! uniform: 2xx bodies are decoded, anything else becomes
//! [`AdminError::Rejected`] with the body's `detail`.

mod transport;

pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, Transport, TransportError,
};

use crate::config::AdminConfig;
use crate::errors::AdminError;
use crate::resources::Resource;
use crate::session::SessionContext;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: SessionContext) -> Self {
        Self { transport, session }
    }

    /// Client speaking HTTP to the configured base URL
    #[must_use]
    pub fn from_config(config: &AdminConfig, session: SessionContext) -> Self {
        Self::new(Arc::new(HttpTransport::new(config.clone())), session)
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, AdminError> {
        let request = ApiRequest::new(method, path)
            .with_body(body)
            .with_bearer(self.session.token());
        Ok(self.transport.send(request).await?)
    }

    async fn send_checked(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, AdminError> {
        let response = self.send(method, path, body).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(AdminError::rejected(response.status, &response.body))
        }
    }

    /// Exchange credentials for a bearer token
    ///
    /// The token is returned, not stored; persisting it is the caller's step.
    ///
    /// # Errors
    ///
    /// [`AdminError::InvalidCredentials`] for any non-2xx response,
    /// [`AdminError::Connection`] when no response arrives,
    /// [`AdminError::Decode`] when a 2xx body has no usable token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AdminError> {
        let form = vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        let request = ApiRequest::new(Method::Post, LOGIN_PATH).with_body(RequestBody::Form(form));
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(AdminError::InvalidCredentials {
                status: response.status,
            });
        }
        let LoginResponse { access_token } = response.json()?;
        if access_token.trim().is_empty() {
            return Err(AdminError::decode("login response carried an empty access_token"));
        }
        Ok(access_token)
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or undecodable bodies.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, AdminError> {
        self.get_json(R::ENDPOINT).await
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or undecodable bodies.
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, AdminError> {
        self.get_json(&R::item_path(id)).await
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or undecodable bodies.
    pub async fn create<R: Resource>(&self, payload: &R::Create) -> Result<R, AdminError> {
        let created = self.post_json(R::ENDPOINT, payload).await?;
        serde_json::from_value(created).map_err(|e| AdminError::decode(e.to_string()))
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or undecodable bodies.
    pub async fn update<R: Resource>(&self, id: i64, payload: &R::Create) -> Result<R, AdminError> {
        let updated = self.put_json(&R::item_path(id), payload).await?;
        serde_json::from_value(updated).map_err(|e| AdminError::decode(e.to_string()))
    }

    /// # Errors
    ///
    /// Fails on transport errors or non-2xx statuses.
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), AdminError> {
        self.send_checked(Method::Delete, &R::item_path(id), RequestBody::Empty)
            .await?;
        tracing::info!(resource = R::RESOURCE_NAME_SINGULAR, id, "Deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        self.send_checked(Method::Get, path, RequestBody::Empty)
            .await?
            .json()
    }

    /// POST a JSON payload; the decoded response body is returned as is
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or a non-JSON body.
    pub async fn post_json<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Value, AdminError> {
        self.send_json(Method::Post, path, payload).await
    }

    /// PUT a JSON payload; the decoded response body is returned as is
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx statuses or a non-JSON body.
    pub async fn put_json<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Value, AdminError> {
        self.send_json(Method::Put, path, payload).await
    }

    async fn send_json<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<Value, AdminError> {
        let body = serde_json::to_value(payload).map_err(|e| AdminError::decode(e.to_string()))?;
        self.send_checked(method, path, RequestBody::Json(body))
            .await?
            .value()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
