//! Pipeline entry point: cleaning, normalization, tokenization, stats.

use crate::clean;
use crate::error::EngineError;
use crate::morphology;
use crate::options::CleaningOptions;
use crate::result::CleaningResult;
use crate::stats::ProcessingStats;
use crate::tokenize;

/// Runs the full pipeline over one text.
///
/// This is a pure function: the same input and options always produce the
/// same [`CleaningResult`], byte for byte, on any thread. Options are
/// validated and the input size guard is applied before any text is
/// touched, so a rejected call does no work.
///
/// # Examples
///
/// ```
/// use engine::{normalize, CleaningOptions};
///
/// let result = normalize("Check https://example.com today!", &CleaningOptions::default())?;
/// assert!(!result.cleaned_text.contains("https"));
/// # Ok::<(), engine::EngineError>(())
/// ```
pub fn normalize(text: &str, options: &CleaningOptions) -> Result<CleaningResult, EngineError> {
    options.validate()?;
    if let Some(limit) = options.max_input_bytes {
        if text.len() > limit {
            return Err(EngineError::InputTooLarge {
                len: text.len(),
                limit,
            });
        }
    }

    let outcome = clean::clean(text, options);
    let normalized = morphology::normalize_text(&outcome.text, options);
    let tokens = tokenize::tokenize(&normalized, options);
    let stats = ProcessingStats::compute(
        text,
        &outcome.text,
        &normalized,
        &tokens,
        outcome.removed,
        outcome.emoticons_preserved,
    );

    Ok(CleaningResult {
        original_text: text.to_string(),
        cleaned_text: outcome.text,
        normalized_text: normalized,
        tokens,
        stats,
    })
}
