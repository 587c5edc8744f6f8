//! In-process transport with scripted responses, for unit tests

use crate::client::{ApiRequest, ApiResponse, Transport, TransportError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers requests from a queue and records what it was sent
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.push(Ok(ApiResponse {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: serde_json::to_vec(&body).expect("serializable body"),
        }))
    }

    pub fn respond_empty(self, status: u16) -> Self {
        self.push(Ok(ApiResponse {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: Vec::new(),
        }))
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)))
    }

    fn push(self, outcome: Result<ApiResponse, TransportError>) -> Self {
        self.responses.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
    }
}
