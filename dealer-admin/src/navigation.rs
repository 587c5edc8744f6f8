//! Client-side routes, the navigator seam and the session guard

use crate::session::SessionContext;
use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Brands,
    Models,
    States,
    Vehicles,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Brands => "/dashboard/marcas",
            Self::Models => "/dashboard/modelos",
            Self::States => "/dashboard/estados",
            Self::Vehicles => "/dashboard/vehiculos",
        }
    }

    /// Whether the page behind this route requires a session
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives client-side navigation requests
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every visit in order
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visits(&self) -> Vec<Route> {
        self.visits
            .lock()
            .map(|visits| visits.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last(&self) -> Option<Route> {
        self.visits.lock().ok().and_then(|visits| visits.last().copied())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigating");
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(route);
        }
    }
}

/// Gate for protected pages
///
/// Returns the bearer token when a session exists. Otherwise navigates to
/// [`Route::Login`] and returns `None`; the caller must render nothing else.
pub fn require_session(session: &SessionContext, navigator: &dyn Navigator) -> Option<String> {
    let token = session.token();
    if token.is_none() {
        tracing::debug!("No session token, redirecting to login");
        navigator.navigate(Route::Login);
    }
    token
}
