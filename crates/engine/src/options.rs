//! Configuration for the cleaning and normalization pipeline.
//!
//! [`CleaningOptions`] enumerates every switch the pipeline understands. The
//! `Default` implementation is the base preset; named presets are thin
//! constructors layered over it. Options are plain data: merging ad-hoc
//! overrides over the base preset is done by deserializing a partial document
//! into the struct (missing fields fall back to the defaults).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Option validation failures, reported before any text is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `min_token_length` exceeds `max_token_length`.
    #[error("min_token_length ({min}) must not exceed max_token_length ({max})")]
    TokenLengthBounds { min: usize, max: usize },

    /// `max_token_length` is zero, which would filter out every token.
    #[error("max_token_length must be at least 1")]
    ZeroMaxTokenLength,

    /// `max_input_bytes` is zero, which would reject every input.
    #[error("max_input_bytes must be at least 1 when set")]
    ZeroInputLimit,
}

/// Switches controlling each stage of the cleaning and normalization
/// pipeline.
///
/// All flags are independent; stage order is fixed by the pipeline itself
/// (see [`crate::normalize`]). Instances are immutable once built: every
/// pipeline call takes the full configuration as an argument, so concurrent
/// callers can share one value or build their own without coordination.
///
/// # Examples
///
/// ```
/// use engine::CleaningOptions;
///
/// let base = CleaningOptions::default();
/// assert!(base.remove_urls);
/// assert!(!base.remove_numbers);
/// assert_eq!(base.min_token_length, 2);
/// ```
///
/// Partial documents merge over the base preset:
///
/// ```
/// use engine::CleaningOptions;
///
/// let merged: CleaningOptions =
///     serde_json::from_str(r#"{ "remove_numbers": true }"#).unwrap();
/// assert!(merged.remove_numbers);
/// assert!(merged.remove_urls); // untouched fields keep their defaults
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Strip tag-like substrings such as `<p>` or `<br/>`.
    pub remove_html_tags: bool,
    /// Strip URL-shaped substrings (`http://`, `https://`, `www.`, `ftp://`).
    pub remove_urls: bool,
    /// Strip email-shaped substrings.
    pub remove_emails: bool,
    /// Strip `@handle` mentions.
    pub remove_mentions: bool,
    /// Strip `#topic` hashtags.
    pub remove_hashtags: bool,
    /// Case-fold the text to lowercase.
    pub convert_to_lowercase: bool,
    /// Strip digit runs, including decimals such as `3.14`.
    pub remove_numbers: bool,
    /// Strip every character that is neither alphanumeric nor whitespace.
    pub remove_special_chars: bool,
    /// Strip punctuation only; consulted when `remove_special_chars` is off.
    pub remove_punctuation: bool,
    /// Collapse runs of whitespace and trim the ends.
    pub remove_extra_whitespace: bool,
    /// Drop stop-word tokens ("the", "is", "and", ...).
    pub remove_stop_words: bool,
    /// Protect catalog emoticons with placeholders so they survive the
    /// character-stripping stages verbatim.
    pub preserve_emoticons: bool,
    /// Apply suffix stemming during normalization.
    pub use_stemming: bool,
    /// Apply dictionary lemmatization during normalization. When both this
    /// and `use_stemming` are set, lemmatization wins.
    pub use_lemmatization: bool,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_length: usize,
    /// Tokens longer than this many characters are dropped.
    pub max_token_length: usize,
    /// Reject inputs larger than this many bytes before processing.
    /// `None` disables the guard.
    pub max_input_bytes: Option<usize>,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_html_tags: true,
            remove_urls: true,
            remove_emails: true,
            remove_mentions: true,
            remove_hashtags: true,
            convert_to_lowercase: true,
            remove_numbers: false,
            remove_special_chars: true,
            remove_punctuation: true,
            remove_extra_whitespace: true,
            remove_stop_words: true,
            preserve_emoticons: true,
            use_stemming: true,
            use_lemmatization: false,
            min_token_length: 2,
            max_token_length: 50,
            max_input_bytes: None,
        }
    }
}

impl CleaningOptions {
    /// Aggressive preset: everything the base preset removes, plus digit
    /// runs, and emoticons are stripped rather than protected.
    pub fn strict() -> Self {
        Self {
            remove_numbers: true,
            preserve_emoticons: false,
            ..Self::default()
        }
    }

    /// Preset tuned for short informal posts: HTML handling is skipped and
    /// normalization uses dictionary lemmatization instead of stemming.
    pub fn social_media() -> Self {
        Self {
            remove_html_tags: false,
            use_stemming: false,
            use_lemmatization: true,
            ..Self::default()
        }
    }

    /// Looks up a preset by name. Recognizes `"strict"` and
    /// `"social-media"` (or `"social_media"`); anything else is `None`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::strict()),
            "social-media" | "social_media" => Some(Self::social_media()),
            _ => None,
        }
    }

    /// Checks numeric bounds for internal consistency.
    ///
    /// Called by the pipeline before any text is touched, so a bad
    /// configuration is rejected synchronously rather than producing
    /// surprising output.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_token_length == 0 {
            return Err(OptionsError::ZeroMaxTokenLength);
        }
        if self.min_token_length > self.max_token_length {
            return Err(OptionsError::TokenLengthBounds {
                min: self.min_token_length,
                max: self.max_token_length,
            });
        }
        if self.max_input_bytes == Some(0) {
            return Err(OptionsError::ZeroInputLimit);
        }
        Ok(())
    }
}
