//! Derived metrics for single transforms and batch rollups.
//!
//! Everything here is computed from already-produced artifacts; nothing in
//! this module re-runs the pipeline. Batch aggregation goes through
//! [`SummaryAccumulator`], whose `merge` is associative so partial
//! aggregates from any partition of a batch combine into the same summary.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::result::CleaningResult;

/// Number of matches removed by each cleaning stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalCounts {
    pub urls: usize,
    pub emails: usize,
    pub mentions: usize,
    pub hashtags: usize,
    pub numbers: usize,
    pub html_tags: usize,
    /// Characters stripped by the special-character or punctuation stage.
    pub punctuation: usize,
    pub stop_words: usize,
}

impl RemovalCounts {
    /// Adds another set of counts into this one, category by category.
    pub fn add(&mut self, other: &RemovalCounts) {
        self.urls += other.urls;
        self.emails += other.emails;
        self.mentions += other.mentions;
        self.hashtags += other.hashtags;
        self.numbers += other.numbers;
        self.html_tags += other.html_tags;
        self.punctuation += other.punctuation;
        self.stop_words += other.stop_words;
    }

    /// Sum over every category.
    pub fn total(&self) -> usize {
        self.urls
            + self.emails
            + self.mentions
            + self.hashtags
            + self.numbers
            + self.html_tags
            + self.punctuation
            + self.stop_words
    }
}

/// Metrics describing one transform. Lengths are in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub original_length: usize,
    pub cleaned_length: usize,
    pub normalized_length: usize,
    pub token_count: usize,
    /// Distinct tokens in this one result.
    pub vocabulary_size: usize,
    pub avg_token_length: f64,
    /// Cleaned length divided by original length; 0.0 for empty input.
    pub compression_ratio: f64,
    pub removed: RemovalCounts,
    /// Glyphs carried through the pipeline by placeholder protection.
    pub emoticons_preserved: usize,
}

impl ProcessingStats {
    /// Computes the metrics for one finished transform.
    pub fn compute(
        original: &str,
        cleaned: &str,
        normalized: &str,
        tokens: &[String],
        removed: RemovalCounts,
        emoticons_preserved: usize,
    ) -> Self {
        let original_length = original.chars().count();
        let cleaned_length = cleaned.chars().count();
        let normalized_length = normalized.chars().count();
        let token_count = tokens.len();
        let vocabulary_size = tokens
            .iter()
            .map(String::as_str)
            .collect::<FxHashSet<_>>()
            .len();
        let token_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let avg_token_length = if token_count == 0 {
            0.0
        } else {
            token_chars as f64 / token_count as f64
        };
        let compression_ratio = if original_length == 0 {
            0.0
        } else {
            cleaned_length as f64 / original_length as f64
        };
        Self {
            original_length,
            cleaned_length,
            normalized_length,
            token_count,
            vocabulary_size,
            avg_token_length,
            compression_ratio,
            removed,
            emoticons_preserved,
        }
    }
}

/// Rolled-up metrics for a finished batch.
///
/// Averages are taken over successfully processed texts; failed items
/// contribute only to `failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_texts: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub total_tokens: usize,
    /// Distinct tokens across every successful result.
    pub vocabulary_size: usize,
    /// Vocabulary size divided by total tokens; 0.0 when no tokens.
    pub vocabulary_diversity: f64,
    pub avg_tokens_per_text: f64,
    pub avg_token_length: f64,
    pub original_chars: usize,
    pub cleaned_chars: usize,
    pub removed: RemovalCounts,
}

impl BatchSummary {
    /// Aggregates a slice of successful results in one pass.
    pub fn aggregate<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a CleaningResult>,
    {
        let mut acc = SummaryAccumulator::default();
        for result in results {
            acc.record(result);
        }
        acc.finish()
    }
}

/// Order-independent accumulator behind [`BatchSummary`].
///
/// `merge` combines two partial aggregates; because every field is a sum or
/// a set union, `merge(a, merge(b, c))` equals `merge(merge(a, b), c)` and
/// workers may accumulate in any partition.
#[derive(Debug, Default, Clone)]
pub struct SummaryAccumulator {
    succeeded: usize,
    failed: usize,
    total_tokens: usize,
    token_chars: usize,
    vocabulary: FxHashSet<String>,
    original_chars: usize,
    cleaned_chars: usize,
    removed: RemovalCounts,
}

impl SummaryAccumulator {
    /// Folds one successful result into the aggregate.
    pub fn record(&mut self, result: &CleaningResult) {
        self.succeeded += 1;
        self.total_tokens += result.tokens.len();
        self.token_chars += result
            .tokens
            .iter()
            .map(|t| t.chars().count())
            .sum::<usize>();
        for token in &result.tokens {
            if !self.vocabulary.contains(token.as_str()) {
                self.vocabulary.insert(token.clone());
            }
        }
        self.original_chars += result.stats.original_length;
        self.cleaned_chars += result.stats.cleaned_length;
        self.removed.add(&result.stats.removed);
    }

    /// Counts one failed item.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Combines another partial aggregate into this one.
    pub fn merge(&mut self, other: SummaryAccumulator) {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.total_tokens += other.total_tokens;
        self.token_chars += other.token_chars;
        self.vocabulary.extend(other.vocabulary);
        self.original_chars += other.original_chars;
        self.cleaned_chars += other.cleaned_chars;
        self.removed.add(&other.removed);
    }

    /// Finalizes the ratios and produces the summary.
    pub fn finish(&self) -> BatchSummary {
        let vocabulary_size = self.vocabulary.len();
        let vocabulary_diversity = if self.total_tokens == 0 {
            0.0
        } else {
            vocabulary_size as f64 / self.total_tokens as f64
        };
        let avg_tokens_per_text = if self.succeeded == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.succeeded as f64
        };
        let avg_token_length = if self.total_tokens == 0 {
            0.0
        } else {
            self.token_chars as f64 / self.total_tokens as f64
        };
        BatchSummary {
            total_texts: self.succeeded + self.failed,
            succeeded: self.succeeded,
            failed: self.failed,
            total_tokens: self.total_tokens,
            vocabulary_size,
            vocabulary_diversity,
            avg_tokens_per_text,
            avg_token_length,
            original_chars: self.original_chars,
            cleaned_chars: self.cleaned_chars,
            removed: self.removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_tokens(tokens: &[&str]) -> CleaningResult {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let joined = tokens.join(" ");
        let stats = ProcessingStats::compute(
            &joined,
            &joined,
            &joined,
            &tokens,
            RemovalCounts::default(),
            0,
        );
        CleaningResult {
            original_text: joined.clone(),
            cleaned_text: joined.clone(),
            normalized_text: joined,
            tokens,
            stats,
        }
    }

    #[test]
    fn compute_handles_empty_input() {
        let stats =
            ProcessingStats::compute("", "", "", &[], RemovalCounts::default(), 0);
        assert_eq!(stats.original_length, 0);
        assert_eq!(stats.token_count, 0);
        assert_eq!(stats.avg_token_length, 0.0);
        assert_eq!(stats.compression_ratio, 0.0);
    }

    #[test]
    fn compute_counts_distinct_tokens() {
        let tokens: Vec<String> = ["data", "data", "rust"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let stats = ProcessingStats::compute(
            "data data rust!",
            "data data rust",
            "data data rust",
            &tokens,
            RemovalCounts::default(),
            0,
        );
        assert_eq!(stats.token_count, 3);
        assert_eq!(stats.vocabulary_size, 2);
        assert_eq!(stats.avg_token_length, 4.0);
        assert!(stats.compression_ratio > 0.9 && stats.compression_ratio < 1.0);
    }

    #[test]
    fn lengths_are_measured_in_chars() {
        let tokens = vec!["café".to_string()];
        let stats = ProcessingStats::compute(
            "café",
            "café",
            "café",
            &tokens,
            RemovalCounts::default(),
            0,
        );
        assert_eq!(stats.original_length, 4);
        assert_eq!(stats.avg_token_length, 4.0);
        assert_eq!(stats.compression_ratio, 1.0);
    }

    #[test]
    fn merge_is_associative_over_partitions() {
        let r1 = result_with_tokens(&["alpha", "beta"]);
        let r2 = result_with_tokens(&["beta", "gamma"]);
        let r3 = result_with_tokens(&["gamma", "delta", "alpha"]);

        let mut whole = SummaryAccumulator::default();
        whole.record(&r1);
        whole.record(&r2);
        whole.record(&r3);

        let mut left = SummaryAccumulator::default();
        left.record(&r1);
        let mut right = SummaryAccumulator::default();
        right.record(&r2);
        right.record(&r3);
        left.merge(right);

        assert_eq!(whole.finish(), left.finish());
    }

    #[test]
    fn failures_count_without_touching_token_stats() {
        let mut acc = SummaryAccumulator::default();
        acc.record(&result_with_tokens(&["one", "two"]));
        acc.record_failure();
        let summary = acc.finish();
        assert_eq!(summary.total_texts, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_tokens, 2);
        assert_eq!(summary.avg_tokens_per_text, 2.0);
    }

    #[test]
    fn vocabulary_spans_the_whole_batch() {
        let summary = BatchSummary::aggregate([
            result_with_tokens(&["alpha", "beta"]),
            result_with_tokens(&["beta", "alpha"]),
        ]
        .iter());
        assert_eq!(summary.total_tokens, 4);
        assert_eq!(summary.vocabulary_size, 2);
        assert_eq!(summary.vocabulary_diversity, 0.5);
    }

    #[test]
    fn removal_counts_sum_by_category() {
        let mut a = RemovalCounts {
            urls: 1,
            stop_words: 2,
            ..RemovalCounts::default()
        };
        let b = RemovalCounts {
            urls: 3,
            emails: 1,
            ..RemovalCounts::default()
        };
        a.add(&b);
        assert_eq!(a.urls, 4);
        assert_eq!(a.emails, 1);
        assert_eq!(a.stop_words, 2);
        assert_eq!(a.total(), 7);
    }
}
