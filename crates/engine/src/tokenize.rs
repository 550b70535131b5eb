//! Tokenization: whitespace splitting with apostrophe/hyphen handling and
//! length filtering.

use crate::options::CleaningOptions;

/// Splits normalized text into tokens.
///
/// Tokens containing an apostrophe split at it; hyphenated tokens longer
/// than three characters split at the hyphens, keeping only parts longer
/// than one character. All surviving tokens are then filtered against the
/// configured length bounds (inclusive, measured in characters).
pub(crate) fn tokenize(text: &str, options: &CleaningOptions) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for raw in text.split_whitespace() {
        if raw.contains('\'') {
            tokens.extend(
                raw.split('\'')
                    .filter(|part| !part.is_empty())
                    .map(str::to_string),
            );
        } else if raw.contains('-') && raw.chars().count() > 3 {
            tokens.extend(
                raw.split('-')
                    .filter(|part| part.chars().count() > 1)
                    .map(str::to_string),
            );
        } else {
            tokens.push(raw.to_string());
        }
    }
    tokens.retain(|token| {
        let len = token.chars().count();
        len >= options.min_token_length && len <= options.max_token_length
    });
    tokens
}
