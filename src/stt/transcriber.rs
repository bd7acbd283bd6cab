use crate::error::{KikitoriError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (remote API vs mock).
/// Segments may be in flight concurrently, so one instance is shared
/// across tasks.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one encoded audio payload to text.
    ///
    /// # Arguments
    /// * `audio` - Encoded audio bytes (a complete file, not raw samples)
    /// * `file_name` - Upload file name whose extension matches the encoding
    /// * `mime_type` - MIME type of the payload
    ///
    /// # Returns
    /// Transcribed text or error
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str, mime_type: &str)
    -> Result<String>;

    /// Get the name of the model behind this transcriber
    fn model_name(&self) -> &str;
}

/// Implement Transcriber for Arc<T> to allow sharing across tasks.
#[async_trait]
impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<String> {
        (**self).transcribe(audio, file_name, mime_type).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Mock transcriber for testing.
///
/// Each call answers with, in order of precedence: the next scripted
/// response, a payload-size echo, or the fixed response.
pub struct MockTranscriber {
    model_name: String,
    response: String,
    scripted: Mutex<VecDeque<String>>,
    echo_size: bool,
    fail_from_call: Option<usize>,
    calls: AtomicUsize,
    uploads: Mutex<Vec<(String, String)>>,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: "mock transcription".to_string(),
            scripted: Mutex::new(VecDeque::new()),
            echo_size: false,
            fail_from_call: None,
            calls: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Queue responses consumed one per call, ahead of the fixed response
    pub fn with_scripted_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripted
            .lock()
            .unwrap()
            .extend(responses.into_iter().map(Into::into));
        self
    }

    /// Derive each response from the payload size, so tests can tell
    /// segments apart without scripting
    pub fn with_size_echo(mut self) -> Self {
        self.echo_size = true;
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(self) -> Self {
        self.with_failure_from_call(0)
    }

    /// Configure the mock to fail from the given zero-based call index
    pub fn with_failure_from_call(mut self, index: usize) -> Self {
        self.fail_from_call = Some(index);
        self
    }

    /// Number of transcribe calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(file_name, mime_type)` pairs seen so far, in call order
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<String> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploads
            .lock()
            .unwrap()
            .push((file_name.to_string(), mime_type.to_string()));

        if let Some(first_failing) = self.fail_from_call
            && index >= first_failing
        {
            return Err(KikitoriError::Transcription {
                message: "mock transcription failure".to_string(),
            });
        }

        if let Some(scripted) = self.scripted.lock().unwrap().pop_front() {
            return Ok(scripted);
        }

        if self.echo_size {
            return Ok(format!("[{} bytes]", audio.len()));
        }

        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
