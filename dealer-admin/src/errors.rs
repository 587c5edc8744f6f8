//! # Error Handling for the Admin Client
//!
//! Every failure a form can hit is one [`AdminError`]. Each variant knows the
//! sanitized, localized message shown next to the form and, separately, the
//! internal details that only go to the log.
//!
//! ## Philosophy
//!
//! **Nothing is fatal**. A rejected submission, a dropped connection or a
//! failed reference load all leave the form interactive; the user edits and
//! resubmits. Transport and decoding details are logged through `tracing` and
//! never rendered.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dealer_admin::AdminError;
//!
//! match client.create::<Brand>(&payload).await {
//!     Ok(brand) => navigator.navigate(Route::Brands),
//!     Err(err) => {
//!         err.log_internal();
//!         show_inline(err.user_message());
//!     }
//! }
//! ```

use crate::validation::ValidationErrors;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Fallback when a rejected submission carries no `detail`.
pub const GENERIC_SAVE_ERROR: &str = "No se pudo guardar el registro";

/// Shown for any request that never produced a response.
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

/// Shown for every non-2xx login response.
pub const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

const INVALID_RESPONSE: &str = "Respuesta inválida del servidor";
const SESSION_STORAGE_ERROR: &str = "No se pudo guardar la sesión";

/// Client error type with sanitized messages and internal logging
#[derive(Debug)]
pub enum AdminError {
    /// Required fields missing, rejected before any request
    Validation {
        errors: ValidationErrors,
    },

    /// The backend answered with a non-2xx status
    Rejected {
        status: StatusCode,
        /// `detail` from the response body, when present
        detail: Option<String>,
    },

    /// The login endpoint answered with a non-2xx status
    InvalidCredentials {
        status: StatusCode,
    },

    /// The request never produced a response
    Connection {
        /// Transport error (logged, not shown)
        internal: String,
    },

    /// A 2xx response whose body could not be decoded
    Decode {
        /// Decoder error (logged, not shown)
        internal: String,
    },

    /// The session token could not be persisted or removed
    Storage {
        /// I/O error (logged, not shown)
        internal: String,
    },

    /// Invalid client configuration
    Config {
        message: String,
    },
}

impl AdminError {
    // ============================================================================
    // Constructors
    // ============================================================================

    /// Build a rejection from a non-2xx status and its raw body
    #[must_use]
    pub fn rejected(status: StatusCode, body: &[u8]) -> Self {
        Self::Rejected {
            status,
            detail: detail_from_body(body),
        }
    }

    pub fn connection(internal: impl Into<String>) -> Self {
        Self::Connection {
            internal: internal.into(),
        }
    }

    pub fn decode(internal: impl Into<String>) -> Self {
        Self::Decode {
            internal: internal.into(),
        }
    }

    pub fn storage(internal: impl Into<String>) -> Self {
        Self::Storage {
            internal: internal.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// HTTP status, for errors that carry a response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } | Self::InvalidCredentials { status } => Some(*status),
            _ => None,
        }
    }

    /// The localized message rendered next to the form
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { errors } => errors.summary(),
            Self::Rejected { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| GENERIC_SAVE_ERROR.to_string()),
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS.to_string(),
            Self::Connection { .. } => CONNECTION_ERROR.to_string(),
            Self::Decode { .. } => INVALID_RESPONSE.to_string(),
            Self::Storage { .. } => SESSION_STORAGE_ERROR.to_string(),
            Self::Config { message } => message.clone(),
        }
    }

    /// Log internal error details (not shown to the user)
    ///
    /// Only produces output when the binary installed a subscriber.
    pub fn log_internal(&self) {
        match self {
            Self::Connection { internal } => {
                tracing::error!(error = %internal, "Request failed before a response");
            }
            Self::Decode { internal } => {
                tracing::error!(error = %internal, "Response body could not be decoded");
            }
            Self::Storage { internal } => {
                tracing::error!(error = %internal, "Session storage failed");
            }
            Self::Validation { errors } => {
                tracing::debug!(invalid = errors.len(), "Submission rejected before sending");
            }
            Self::Rejected { status, detail } => {
                tracing::debug!(
                    status = %status,
                    detail = detail.as_deref().unwrap_or("-"),
                    "Backend rejected request"
                );
            }
            _ => {
                tracing::debug!(error = %self.user_message(), "Client error");
            }
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AdminError {}

impl From<ValidationErrors> for AdminError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }
}

/// Extract the `detail` field from an error body
///
/// A string detail is returned as is. A list detail (one entry per failing
/// field) is flattened by joining each entry's `msg`.
#[must_use]
pub fn detail_from_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
