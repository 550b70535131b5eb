//! # engine
//!
//! Deterministic text cleaning, normalization, and tokenization.
//!
//! The whole crate is a pure function over `(text, options)`: no I/O, no
//! shared mutable state, no randomness. The same input under the same
//! [`CleaningOptions`] produces the same [`CleaningResult`] on every call
//! and every thread, which is what makes the batch layer above it safe to
//! fan out without coordination.
//!
//! Processing happens in three passes:
//!
//! 1. **Cleaning** — staged noise removal in a fixed order: emoticon
//!    protection, HTML tags, URLs, emails, mentions, hashtags, case
//!    folding, numbers, special characters or punctuation, whitespace,
//!    stop words, emoticon restoration.
//! 2. **Normalization** — contraction expansion, then rule-based stemming
//!    or dictionary-first lemmatization per token.
//! 3. **Tokenization** — whitespace splitting with apostrophe/hyphen
//!    handling and token length bounds.
//!
//! Every stage is driven by [`CleaningOptions`]; the stage order itself is
//! not configurable.
//!
//! # Quick start
//!
//! ```
//! use engine::{normalize, CleaningOptions};
//!
//! let result = normalize(
//!     "Cleaning the new release!! :) https://example.com",
//!     &CleaningOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.cleaned_text, "cleaning new release :)");
//! assert_eq!(result.tokens, vec!["clean", "new", "release", ":)"]);
//! assert_eq!(result.stats.removed.urls, 1);
//! ```

mod catalog;
mod clean;
mod emoticon;
mod error;
mod morphology;
mod options;
mod pipeline;
mod result;
mod stats;
mod tokenize;

pub use catalog::is_stop_word;
pub use error::EngineError;
pub use options::{CleaningOptions, OptionsError};
pub use pipeline::normalize;
pub use result::CleaningResult;
pub use stats::{BatchSummary, ProcessingStats, RemovalCounts, SummaryAccumulator};
