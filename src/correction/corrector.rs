//! Corrector trait for post-transcription text cleanup.

use crate::error::{KikitoriError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Trait for post-transcription text correction.
///
/// Implementations receive one transcript chunk at a time and return the
/// corrected text. Chunks may be in flight concurrently, so one instance is
/// shared across tasks.
#[async_trait]
pub trait Corrector: Send + Sync {
    /// Return a corrected version of the given chunk.
    async fn correct(&self, chunk: &str) -> Result<String>;

    /// Return the name of this corrector for logging.
    fn model_name(&self) -> &str;
}

/// Implement Corrector for Arc<T> to allow sharing across tasks.
#[async_trait]
impl<T: Corrector + ?Sized> Corrector for Arc<T> {
    async fn correct(&self, chunk: &str) -> Result<String> {
        (**self).correct(chunk).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Mock corrector for testing.
///
/// By default echoes the chunk back, optionally wrapped in marker strings so
/// tests can see which text passed through correction.
pub struct MockCorrector {
    model_name: String,
    response: Option<String>,
    prefix: String,
    suffix: String,
    fail_from_call: Option<usize>,
    calls: AtomicUsize,
    received: Mutex<Vec<String>>,
}

impl MockCorrector {
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: None,
            prefix: String::new(),
            suffix: String::new(),
            fail_from_call: None,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Configure the mock to return a fixed response regardless of input
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    /// Wrap each echoed chunk in the given markers
    pub fn with_markers(mut self, prefix: &str, suffix: &str) -> Self {
        self.prefix = prefix.to_string();
        self.suffix = suffix.to_string();
        self
    }

    /// Configure the mock to fail on correct
    pub fn with_failure(self) -> Self {
        self.with_failure_from_call(0)
    }

    /// Configure the mock to fail from the given zero-based call index
    pub fn with_failure_from_call(mut self, index: usize) -> Self {
        self.fail_from_call = Some(index);
        self
    }

    /// Number of correct calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Chunks received so far, in call order
    pub fn received_chunks(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Corrector for MockCorrector {
    async fn correct(&self, chunk: &str) -> Result<String> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(chunk.to_string());

        if let Some(first_failing) = self.fail_from_call
            && index >= first_failing
        {
            return Err(KikitoriError::Correction {
                message: "mock correction failure".to_string(),
            });
        }

        if let Some(response) = &self.response {
            return Ok(response.clone());
        }

        Ok(format!("{}{}{}", self.prefix, chunk, self.suffix))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
