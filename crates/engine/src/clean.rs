//! The cleaning pass: staged noise removal ahead of linguistic
//! normalization.
//!
//! Stage order is fixed and load-bearing: protection runs before anything
//! destructive, case folding before number/character stripping, stop-word
//! filtering after whitespace is already collapsed, restoration last.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog;
use crate::emoticon;
use crate::options::CleaningOptions;
use crate::stats::RemovalCounts;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://\S+|www\.\S+|ftp://\S+)").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());

pub(crate) struct CleanOutcome {
    pub(crate) text: String,
    pub(crate) removed: RemovalCounts,
    pub(crate) emoticons_preserved: usize,
}

fn scrub(text: &str, pattern: &Regex, count: &mut usize) -> String {
    *count += pattern.find_iter(text).count();
    pattern.replace_all(text, " ").into_owned()
}

/// Runs the staged cleaning pass. Options must already be validated.
pub(crate) fn clean(text: &str, options: &CleaningOptions) -> CleanOutcome {
    let mut removed = RemovalCounts::default();

    let (mut work, glyphs) = if options.preserve_emoticons {
        emoticon::protect(text)
    } else {
        (text.to_string(), Vec::new())
    };

    if options.remove_html_tags {
        work = scrub(&work, &HTML_TAG, &mut removed.html_tags);
    }
    if options.remove_urls {
        work = scrub(&work, &URL, &mut removed.urls);
    }
    if options.remove_emails {
        work = scrub(&work, &EMAIL, &mut removed.emails);
    }
    if options.remove_mentions {
        work = scrub(&work, &MENTION, &mut removed.mentions);
    }
    if options.remove_hashtags {
        work = scrub(&work, &HASHTAG, &mut removed.hashtags);
    }
    if options.convert_to_lowercase {
        work = work.to_lowercase();
    }
    if options.remove_numbers {
        work = scrub(&work, &NUMBER, &mut removed.numbers);
    }
    if options.remove_special_chars {
        work = scrub(&work, &NON_ALPHANUMERIC, &mut removed.punctuation);
    } else if options.remove_punctuation {
        work = scrub(&work, &PUNCTUATION, &mut removed.punctuation);
    }
    if options.remove_extra_whitespace {
        work = work.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    if options.remove_stop_words {
        let mut kept: Vec<&str> = Vec::new();
        for token in work.split_whitespace() {
            if catalog::is_stop_word(token) {
                removed.stop_words += 1;
            } else {
                kept.push(token);
            }
        }
        work = kept.join(" ");
    }

    let emoticons_preserved = glyphs.len();
    if !glyphs.is_empty() {
        work = emoticon::restore(&work, &glyphs);
    }

    CleanOutcome {
        text: work,
        removed,
        emoticons_preserved,
    }
}
