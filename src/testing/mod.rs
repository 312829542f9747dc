use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::api::{ApiGateway, ApiRequest, ArmsApi, RawResponse, Transport, TransportError};
use crate::context::AppContext;
use crate::session::SessionStore;
use crate::storage::MemoryStore;

/// Scripted transport: replays queued responses in order and records every request
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond_text(status, &body.to_string());
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string);
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            reason,
            body: body.to_string(),
        }));
    }

    pub fn fail_network(&self, detail: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(detail.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response left".to_string())))
    }
}

/// A context over a scripted transport and in-memory storage
pub fn test_context(transport: Arc<RecordingTransport>) -> (AppContext, MemoryStore) {
    let storage = MemoryStore::new();
    let session = SessionStore::open(Arc::new(storage.clone()));
    let api = ArmsApi::new(ApiGateway::new(transport));
    (AppContext::new(api, session), storage)
}
