//! Scripted in-memory completion service for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResult, CompletionService, FinishReason, LlmError};

type Responder = dyn Fn(&CompletionRequest) -> Result<CompletionResult, LlmError> + Send + Sync;

pub struct ScriptedService {
    responder: Box<Responder>,
    calls: Mutex<Vec<CompletionRequest>>,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedService {
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<CompletionResult, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Always answers with `text` and a normal finish.
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::from_fn(move |_| Ok(completion(&text)))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        {
            self.calls.lock().unwrap().push(request.clone());
        }
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        (self.responder)(request)
    }
}

/// A normal, complete completion carrying `text`.
pub fn completion(text: &str) -> CompletionResult {
    CompletionResult {
        text: Some(text.to_string()),
        finish_reason: FinishReason::Stop,
    }
}
