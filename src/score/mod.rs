//! Score extraction from raw model output.
//!
//! The model is instructed to return "just a number", but that expectation is
//! loose: replies range from a bare numeral to `"Score: 82"` to a refusal
//! sentence. Extraction is an ordered list of parser strategies; the first
//! success wins, and a miss on every strategy resolves to a default rather
//! than an error.


/// Score used when no strategy recognizes a number in the model output.
pub const DEFAULT_SCORE: u32 = 50;

const MAX_SCORE: u32 = 100;

/// Extracts an integer score in `[0, 100]` from raw model text.
///
/// Strategies, in priority order:
///
/// 1. First standalone run of 1-3 ASCII digits (word-boundary delimited).
///    A minus sign is not a word character, so `"-5"` yields `5`, and a dot
///    is a boundary, so `"97.6"` yields `97`.
/// 2. The whole trimmed text parsed as a float, rounded half-away-from-zero.
/// 3. Default of [`DEFAULT_SCORE`] with a non-fatal diagnostic.
///
/// Out-of-range values are clamped to the nearest bound.
pub fn extract_score(raw: &str) -> u32 {
    let text = raw.trim();

    let strategies: [fn(&str) -> Option<u32>; 2] = [standalone_digit_run, whole_text_float];
    for parse in strategies {
        if let Some(score) = parse(text) {
            return score;
        }
    }

    tracing::warn!(
        output = text,
        default = DEFAULT_SCORE,
        "model output contained no recognizable score, using default"
    );
    DEFAULT_SCORE
}

/// Word characters for boundary purposes: ASCII alphanumerics and `_`.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Finds the first run of 1-3 ASCII digits not flanked by word characters.
fn standalone_digit_run(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        let bounded_left = start == 0 || !is_word_byte(bytes[start - 1]);
        let bounded_right = i == bytes.len() || !is_word_byte(bytes[i]);
        if i - start <= 3 && bounded_left && bounded_right {
            return text[start..i].parse::<u32>().ok().map(|v| v.min(MAX_SCORE));
        }
    }

    None
}

/// Parses the entire trimmed text as a float, rounding half away from zero.
/// Negative values clamp to zero.
fn whole_text_float(text: &str) -> Option<u32> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some((value.round().max(0.0) as u32).min(MAX_SCORE))
}
