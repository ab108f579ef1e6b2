//! The external model seam.
//!
//! [`ScoreModel`] is the capability the gateway depends on; [`GeminiModel`]
//! is the production implementation over the `genai` client. Availability,
//! quota, and retry policy are the collaborator's concern, not ours.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::ProviderError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockModel;

use async_trait::async_trait;
use base64::Engine;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ContentPart, MessageContent};
use tracing::debug;

use crate::rubric::RubricConfig;

/// A validated image upload, ready for the provider call.
///
/// Holds the original encoded bytes; decoding happens once at the gateway as
/// a validation step and the provider receives the untouched upload.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    /// MIME type derived from the image's magic bytes.
    pub mime: &'static str,

    /// The encoded image exactly as uploaded.
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Standard base64 of the encoded bytes, as the provider wire format
    /// expects.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// A multimodal model that completes a (prompt, image) pair into raw text.
#[async_trait]
pub trait ScoreModel: Send + Sync {
    /// Issues one synchronous model call and returns the trimmed text
    /// completion. No retry, no timeout beyond the client's own defaults.
    async fn complete(&self, prompt: &str, image: &ImagePayload) -> Result<String, ProviderError>;
}

/// Production [`ScoreModel`] backed by the Gemini API via `genai`.
///
/// The client resolves its credential from `GEMINI_API_KEY`; startup
/// configuration guarantees the variable is present before this is built.
#[derive(Clone)]
pub struct GeminiModel {
    client: Client,
    model: String,
    rubric: RubricConfig,
}

impl GeminiModel {
    pub fn new(model: impl Into<String>, rubric: RubricConfig) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
            rubric,
        }
    }

    /// Model identifier sent with every call.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat_options(&self) -> ChatOptions {
        let params = &self.rubric.params;
        ChatOptions::default()
            .with_temperature(params.temperature)
            .with_top_p(params.top_p)
            .with_max_tokens(params.max_output_tokens)
    }
}

#[async_trait]
impl ScoreModel for GeminiModel {
    async fn complete(&self, prompt: &str, image: &ImagePayload) -> Result<String, ProviderError> {
        let mut user_content = MessageContent::default();
        user_content.push(ContentPart::Text(prompt.to_string()));
        user_content.push(ContentPart::from_binary_base64(image.mime, image.to_base64(), None));

        let request = ChatRequest::new(vec![
            ChatMessage::system(self.rubric.instruction),
            ChatMessage::user(user_content),
        ]);

        debug!(model = %self.model, mime = image.mime, "dispatching model call");

        let response = self
            .client
            .exec_chat(&self.model, request, Some(&self.chat_options()))
            .await
            .map_err(|e| ProviderError::Call(e.to_string()))?;

        Ok(response.first_text().unwrap_or_default().trim().to_string())
    }
}
