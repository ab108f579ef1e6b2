//! Provider error types.

use thiserror::Error;

/// Errors from the external model collaborator.
///
/// The service applies no retry or backoff of its own; a transient provider
/// failure surfaces directly to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The model call failed (network, quota, auth). Carries the provider's
    /// own message.
    #[error("model call failed: {0}")]
    Call(String),
}
