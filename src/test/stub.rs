use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{Transport, TransportError};

/// Replays a canned outcome and records every URL it was asked for.
pub struct StubTransport {
    outcome: Box<dyn Fn() -> Result<String, TransportError> + Send + Sync>,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn body(body: &str) -> Self {
        let body = body.to_string();
        Self::new(move || Ok(body.clone()))
    }

    pub fn failing(err: fn() -> TransportError) -> Self {
        Self::new(move || Err(err()))
    }

    fn new(outcome: impl Fn() -> Result<String, TransportError> + Send + Sync + 'static) -> Self {
        Self {
            outcome: Box::new(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        (self.outcome)()
    }
}
