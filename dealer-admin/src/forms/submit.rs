use crate::client::ApiClient;
use crate::errors::AdminError;
use crate::navigation::{Navigator, Route};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    /// POST to the collection endpoint
    Create,
    /// PUT to an item endpoint
    Update,
}

/// One save of a resource form: where to send it, what, and where to go after
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSubmission<P> {
    pub endpoint: String,
    pub method: SubmitMethod,
    pub payload: P,
    pub on_success_route: Route,
}

impl<P> ResourceSubmission<P> {
    pub fn create(endpoint: impl Into<String>, payload: P, on_success_route: Route) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: SubmitMethod::Create,
            payload,
            on_success_route,
        }
    }

    pub fn update(endpoint: impl Into<String>, payload: P, on_success_route: Route) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: SubmitMethod::Update,
            payload,
            on_success_route,
        }
    }
}

/// Send one submission and navigate once on success
///
/// The request is never retried; on failure the navigator is not touched.
///
/// # Errors
///
/// Returns the client error unchanged.
pub async fn submit_resource<P: Serialize + Sync>(
    client: &ApiClient,
    navigator: &dyn Navigator,
    submission: ResourceSubmission<P>,
) -> Result<Value, AdminError> {
    let ResourceSubmission {
        endpoint,
        method,
        payload,
        on_success_route,
    } = submission;

    let saved = match method {
        SubmitMethod::Create => client.post_json(&endpoint, &payload).await?,
        SubmitMethod::Update => client.put_json(&endpoint, &payload).await?,
    };
    navigator.navigate(on_success_route);
    Ok(saved)
}
