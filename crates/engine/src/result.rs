//! The output shape of one pipeline run.

use serde::{Deserialize, Serialize};

use crate::stats::ProcessingStats;

/// Everything produced for one input text. Immutable once built; callers
/// that need the intermediate forms read them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningResult {
    /// The input exactly as submitted.
    pub original_text: String,
    /// Output of the cleaning pass (noise removal, stage order fixed).
    pub cleaned_text: String,
    /// Output of the normalization pass (contractions, morphology).
    pub normalized_text: String,
    /// Final tokens after splitting and length filtering.
    pub tokens: Vec<String>,
    pub stats: ProcessingStats,
}

impl CleaningResult {
    /// The tokens joined back into a single space-separated string.
    pub fn processed_text(&self) -> String {
        self.tokens.join(" ")
    }
}
