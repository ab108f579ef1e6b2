//! Mock model for gateway and integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ImagePayload, ProviderError, ScoreModel};

/// Scripted [`ScoreModel`] that returns a canned reply or a forced error and
/// counts invocations.
#[derive(Clone)]
pub struct MockModel {
    reply: Arc<str>,
    fail_message: Option<Arc<str>>,
    calls: Arc<AtomicUsize>,
}

impl MockModel {
    /// Mock that answers every call with `reply`.
    pub fn with_reply(reply: impl Into<Arc<str>>) -> Self {
        Self {
            reply: reply.into(),
            fail_message: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that fails every call with the given provider message.
    pub fn failing(message: impl Into<Arc<str>>) -> Self {
        Self {
            reply: Arc::from(""),
            fail_message: Some(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of completed `complete` invocations (across clones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreModel for MockModel {
    async fn complete(&self, _prompt: &str, _image: &ImagePayload) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.fail_message {
            Some(message) => Err(ProviderError::Call(message.to_string())),
            None => Ok(self.reply.trim().to_string()),
        }
    }
}
