//! Promptgauge library crate (used by the server binary and integration tests).
//!
//! The service accepts a multipart POST with a text prompt and an image,
//! forwards both to a multimodal model configured with a fixed scoring rubric,
//! and answers with an integer score in `[0, 100]`.
//!
//! # Modules
//!
//! - [`config`] - Environment-backed server configuration
//! - [`rubric`] - Immutable rubric presets (instruction text + generation parameters)
//! - [`provider`] - The external model seam ([`ScoreModel`]) and its Gemini implementation
//! - [`score`] - Extraction of a bounded integer score from loose model output
//! - [`gateway`] - Axum HTTP surface (`/health`, `/evaluate`)

pub mod config;
pub mod gateway;
pub mod provider;
pub mod rubric;
pub mod score;

pub use config::{Config, ConfigError};
pub use gateway::{EvaluateResponse, HandlerState, create_router_with_state};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockModel;
pub use provider::{GeminiModel, ImagePayload, ProviderError, ScoreModel};
pub use rubric::{GenerationParams, MAX_OUTPUT_TOKENS_CAP, RubricConfig, RubricPreset};
pub use score::{DEFAULT_SCORE, extract_score};
