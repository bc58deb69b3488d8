//! Shared test fixtures.
//!
//! [`MockBackend`] serves canned JSON per path and records every request,
//! so tests can assert both what was rendered and which fetches happened.
//! Unknown paths answer 404.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use crate::services::api_client::{Backend, FetchError};

#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Status(u16),
    Transport,
}

#[derive(Default)]
pub struct MockBackend {
    routes: Mutex<HashMap<String, MockReply>>,
    delays: Mutex<HashMap<String, Duration>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, value: Value) -> Self {
        self.set(path, MockReply::Json(value));
        self
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.set(path, MockReply::Status(status));
        self
    }

    pub fn with_transport_error(self, path: &str) -> Self {
        self.set(path, MockReply::Transport);
        self
    }

    pub fn with_delay(self, path: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
        self
    }

    pub fn set(&self, path: &str, reply: MockReply) {
        self.routes.lock().unwrap().insert(path.to_string(), reply);
    }

    /// Hold the next request to `path` until the returned handle is notified.
    /// Later requests to the same path are not held.
    pub fn gate_once(&self, path: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(path.to_string(), gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == path).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Backend for MockBackend {
    fn base_url(&self) -> &str {
        "http://api.test"
    }

    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        // Captured up front so a held request answers with what was routed
        // when it was issued.
        let reply = self.routes.lock().unwrap().get(path).cloned();
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().remove(path);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Some(MockReply::Json(value)) => Ok(value),
            Some(MockReply::Status(status)) => Err(FetchError::Status {
                path: path.to_string(),
                status,
            }),
            Some(MockReply::Transport) => Err(FetchError::Transport {
                path: path.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}
