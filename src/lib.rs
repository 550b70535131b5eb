//! Workspace umbrella crate for textprep.
//!
//! This crate stitches the pure text pipeline (`engine`) and the batch
//! orchestration layer (`jobs`) together so callers get one API surface:
//! synchronous single-text and batch helpers here, asynchronous job
//! submission and polling through the re-exported [`JobManager`].
//!
//! ```
//! use textprep::{process_text, CleaningOptions};
//!
//! let result = process_text(
//!     "Visit https://x.com now!! :) test@mail.com 123",
//!     &CleaningOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(!result.cleaned_text.contains("x.com"));
//! assert!(result.cleaned_text.contains(":)"));
//! ```

pub use engine::{
    is_stop_word, normalize, BatchSummary, CleaningOptions, CleaningResult, EngineError,
    OptionsError, ProcessingStats, RemovalCounts, SummaryAccumulator,
};
pub use jobs::{
    cancellation, poll_until_complete, BatchItem, CancelHandle, CancelSignal, ConfigError,
    JobError, JobManager, JobStatus, JobStatusView, JobsConfig, PollOptions,
};

/// Cleans, normalizes, and tokenizes one text under the given options.
///
/// Thin alias over [`engine::normalize`], kept so single-text callers and
/// batch callers import from the same place.
pub fn process_text(text: &str, options: &CleaningOptions) -> Result<CleaningResult, EngineError> {
    engine::normalize(text, options)
}

/// Processes a batch synchronously on the caller's thread.
///
/// Mirrors the job manager's partial-failure policy without the async
/// machinery: options are validated once up front, every text is attempted,
/// per-item failures are recorded in place, and the summary counts both
/// outcomes. Item order matches input order. For large batches or
/// progress reporting, use [`JobManager::submit`] instead.
pub fn process_many(
    texts: &[String],
    options: &CleaningOptions,
) -> Result<(Vec<BatchItem>, BatchSummary), EngineError> {
    options.validate()?;
    let mut items = Vec::with_capacity(texts.len());
    let mut acc = SummaryAccumulator::default();
    for text in texts {
        match engine::normalize(text, options) {
            Ok(result) => {
                acc.record(&result);
                items.push(BatchItem::Ok { result });
            }
            Err(err) => {
                acc.record_failure();
                items.push(BatchItem::Failed {
                    error: err.to_string(),
                });
            }
        }
    }
    Ok((items, acc.finish()))
}
