//! Client configuration
//!
//! The backend base URL has exactly one source: [`AdminConfig`]. It is read
//! from `API_URL` and can be overridden by the caller; nothing else in the
//! crate reads the environment for it.

use crate::errors::AdminError;
use std::path::PathBuf;
use url::Url;

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "API_URL";

/// Environment variable holding the session file path
pub const SESSION_FILE_ENV: &str = "DEALER_ADMIN_SESSION";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    api_url: String,
    session_file: PathBuf,
}

impl AdminConfig {
    /// Build a configuration for the given base URL
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] if the URL does not parse or is not http(s).
    pub fn new(api_url: &str) -> Result<Self, AdminError> {
        Ok(Self {
            api_url: normalize_api_url(api_url)?,
            session_file: default_session_file(),
        })
    }

    /// Read `API_URL` and `DEALER_ADMIN_SESSION`, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] if `API_URL` is set to an invalid URL.
    pub fn from_env() -> Result<Self, AdminError> {
        Self::resolve(None, None)
    }

    /// Explicit values first, then the environment, then defaults
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] if the chosen base URL is invalid.
    pub fn resolve(
        api_url: Option<&str>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, AdminError> {
        let api_url = match api_url {
            Some(url) => url.to_string(),
            None => std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };
        let mut config = Self::new(&api_url)?;
        let session_file =
            session_file.or_else(|| std::env::var_os(SESSION_FILE_ENV).map(PathBuf::from));
        if let Some(path) = session_file {
            config.session_file = path;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn session_file(&self) -> &PathBuf {
        &self.session_file
    }

    /// Absolute URL for an API path such as `/marcas/`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_url)
        } else {
            format!("{}/{path}", self.api_url)
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
        }
    }
}

fn normalize_api_url(raw: &str) -> Result<String, AdminError> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| AdminError::config(format!("API_URL no es una URL válida ({e}): {raw}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AdminError::config(format!(
            "API_URL debe usar http o https: {raw}"
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn default_session_file() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".dealer-admin").join("session.json"),
        None => PathBuf::from(".dealer-admin-session.json"),
    }
}
