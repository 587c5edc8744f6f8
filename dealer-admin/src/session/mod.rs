//! Session token storage and the context passed to the request layer

mod store;

pub use store::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};

use crate::errors::AdminError;
use std::sync::Arc;

/// Explicit session handle shared by every page and request
///
/// Cloning is cheap; all clones see the same underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by a process-local store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Current bearer token; an empty stored value counts as absent
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist the token issued at login
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Storage`] if the store cannot be written.
    pub fn establish(&self, token: &str) -> Result<(), AdminError> {
        self.store.set(token)?;
        tracing::info!("Session established");
        Ok(())
    }

    /// Forget the stored token
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Storage`] if the store cannot be written.
    pub fn end(&self) -> Result<(), AdminError> {
        self.store.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
