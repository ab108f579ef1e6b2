//! Rubric presets: the fixed instruction text and generation parameters
//! handed to the model on every call.
//!
//! Constructed once at startup and never mutated. Two presets exist because
//! both were in observed use; neither is authoritative, so both are kept as
//! named configurations selectable via `PROMPTGAUGE_RUBRIC`.


/// Upper bound on `max_output_tokens` for any preset. Only a short numeral is
/// expected back, so presets never ask for more.
pub const MAX_OUTPUT_TOKENS_CAP: u32 = 10;

const STANDARD_INSTRUCTION: &str = "\
You are an AI evaluator. Your task is to analyze how well a given prompt \
describes the given image. Weigh visual accuracy most heavily, then style, \
mood, and specificity. Return only a numeric score between 0 and 100, where: \
0 = not related at all, 100 = perfectly accurate description.";

const CONCISE_INSTRUCTION: &str = "\
Score from 0 to 100 how well the prompt describes the image. \
Respond with the integer only, no other text.";

/// Named rubric preset, selectable by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricPreset {
    /// Full evaluator instruction with criteria weights; mildly sampled.
    Standard,
    /// Terse integer-only instruction; deterministic sampling, tighter
    /// output budget.
    Concise,
}

impl RubricPreset {
    /// Resolves a preset from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "concise" => Some(Self::Concise),
            _ => None,
        }
    }

    /// Configuration name of this preset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Concise => "concise",
        }
    }

    /// Materializes the preset into its rubric configuration.
    pub fn config(&self) -> RubricConfig {
        match self {
            Self::Standard => RubricConfig {
                instruction: STANDARD_INSTRUCTION,
                params: GenerationParams {
                    temperature: 0.2,
                    top_p: 0.95,
                    top_k: 40,
                    max_output_tokens: 10,
                },
            },
            Self::Concise => RubricConfig {
                instruction: CONCISE_INSTRUCTION,
                params: GenerationParams {
                    temperature: 0.0,
                    top_p: 0.9,
                    top_k: 20,
                    max_output_tokens: 5,
                },
            },
        }
    }
}

/// Immutable rubric configuration: the system instruction steering the
/// model's scoring behavior, plus its sampling controls.
#[derive(Debug, Clone)]
pub struct RubricConfig {
    /// Fixed natural-language scoring criteria sent as the system message.
    pub instruction: &'static str,

    /// Sampling controls for the model call.
    pub params: GenerationParams,
}

/// Generation parameters for one model call.
///
/// `top_k` is retained for completeness; the provider adapter forwards
/// temperature, top-p, and the output-token budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}
