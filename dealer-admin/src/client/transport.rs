use crate::config::AdminConfig;
use crate::errors::AdminError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
}

/// One request to the backend, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            bearer: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// JSON body, if this request carries one
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AdminError> {
        serde_json::from_slice(&self.body).map_err(|e| AdminError::decode(e.to_string()))
    }

    /// Decode the body as loose JSON; an empty body is `null`
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Decode`] if a non-empty body is not JSON.
    pub fn value(&self) -> Result<Value, AdminError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        self.json()
    }
}

/// A request that produced no response at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<TransportError> for AdminError {
    fn from(err: TransportError) -> Self {
        Self::Connection {
            internal: err.message,
        }
    }
}

/// Sends requests to the backend
///
/// Any response, whatever its status, is `Ok`; only a missing response is an
/// error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// HTTP transport over `reqwest`
///
/// No timeout is configured; calls rely on the connector defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: AdminConfig,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.endpoint(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(pairs) => builder.form(pairs),
        };

        tracing::debug!(method = request.method.as_str(), url = %url, "Sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        tracing::debug!(status = %status, bytes = body.len(), "Received response");

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new(Method::Post, "/marcas/")
            .with_body(RequestBody::Json(json!({"nombre": "Toyota"})))
            .with_bearer(Some("abc".to_string()));
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.json(), Some(&json!({"nombre": "Toyota"})));
        assert_eq!(request.bearer.as_deref(), Some("abc"));

        let login = ApiRequest::new(Method::Post, "/auth/login")
            .with_body(RequestBody::Form(vec![("username".into(), "admin".into())]));
        assert_eq!(login.json(), None);
    }

    #[test]
    fn test_empty_body_is_null() {
        let response = ApiResponse {
            status: StatusCode::NO_CONTENT,
            body: Vec::new(),
        };
        assert!(response.is_success());
        assert_eq!(response.value().unwrap(), Value::Null);
    }

    #[test]
    fn test_bad_json_is_decode_error() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: b"<html>".to_vec(),
        };
        assert!(matches!(response.value(), Err(AdminError::Decode { .. })));
    }

    #[test]
    fn test_transport_error_becomes_connection_error() {
        let err: AdminError = TransportError::new("connection refused").into();
        assert!(matches!(err, AdminError::Connection { .. }));
        assert_eq!(err.user_message(), crate::errors::CONNECTION_ERROR);
    }
}
