use axum::{
    Json,
    extract::{Multipart, State},
};
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::provider::{ImagePayload, ScoreModel};
use crate::score::extract_score;

/// Success payload for `/evaluate`. The score is serialized as a string.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct EvaluateResponse {
    pub prompt: String,
    pub score: String,
}

/// Handles one evaluation: validate the multipart fields, decode the image,
/// invoke the model once, extract the score, respond.
#[instrument(skip(state, multipart))]
pub async fn evaluate_handler<M>(
    State(state): State<HandlerState<M>>,
    mut multipart: Multipart,
) -> Result<Json<EvaluateResponse>, GatewayError>
where
    M: ScoreModel + Clone + Send + Sync + 'static,
{
    let mut prompt: Option<String> = None;
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some("prompt") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| GatewayError::Multipart(e.to_string()))?;
                prompt = Some(text);
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| GatewayError::Multipart(e.to_string()))?;
                image_bytes = Some(bytes.to_vec());
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let prompt = prompt
        .filter(|p| !p.is_empty())
        .ok_or(GatewayError::MissingPrompt)?;
    let bytes = image_bytes.ok_or(GatewayError::MissingImage)?;

    let image = decode_image(bytes)?;

    debug!(
        prompt_len = prompt.len(),
        image_bytes = image.bytes.len(),
        mime = image.mime,
        "evaluating prompt against image"
    );

    let raw = state.model.complete(&prompt, &image).await?;
    let score = extract_score(&raw);

    Ok(Json(EvaluateResponse {
        prompt,
        score: score.to_string(),
    }))
}

/// Validates that the upload decodes as a raster image and derives its MIME
/// type from the magic bytes. The original bytes are forwarded untouched.
pub(crate) fn decode_image(bytes: Vec<u8>) -> Result<ImagePayload, GatewayError> {
    let format = image::guess_format(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;
    image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| GatewayError::Decode(e.to_string()))?;

    Ok(ImagePayload {
        mime: format.to_mime_type(),
        bytes,
    })
}
