//! The normalization pass: contraction expansion plus rule-based stemming
//! or lemmatization.
//!
//! The rule sets are deliberately small and deterministic. They make no
//! claim of linguistic completeness; the contract is only that the same
//! token always maps to the same form. Length guards are in characters and
//! every rule works on the lowercased token.

use crate::catalog::{CONTRACTIONS, LEMMA_OVERRIDES};
use crate::options::CleaningOptions;

/// Expands contraction forms in table order. The table puts `won't` and
/// `can't` ahead of the bare `n't` rule, so the specific forms win.
pub(crate) fn expand_contractions(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in CONTRACTIONS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Suffix stemmer. The first rule whose suffix and length guard both hold
/// wins; tokens too short for any rule pass through unchanged.
pub(crate) fn stem(token: &str) -> String {
    let word = token.to_lowercase();
    let n = word.chars().count();
    if word.ends_with("ing") && n > 5 {
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("ed") && n > 4 {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("er") && n > 4 {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("est") && n > 5 {
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("ly") && n > 4 {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("tion") && n > 6 {
        return format!("{}te", &word[..word.len() - 4]);
    }
    if word.ends_with("ness") && n > 6 {
        return word[..word.len() - 4].to_string();
    }
    word
}

/// Dictionary-first lemmatizer: irregular forms resolve through the
/// override table, everything else goes through one suffix chain. A token
/// that enters the `es` branch is decided there even when the answer is
/// "unchanged"; it never falls through to the bare `s` rule.
pub(crate) fn lemmatize(token: &str) -> String {
    let word = token.to_lowercase();
    if let Some(lemma) = LEMMA_OVERRIDES.get(word.as_str()) {
        return (*lemma).to_string();
    }
    let n = word.chars().count();

    if word.ends_with("ies") && n > 4 {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if word.ends_with("ves") && n > 4 {
        return format!("{}f", &word[..word.len() - 3]);
    }
    if word.ends_with("ses") && n > 4 {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("es") && n > 3 {
        if ["ches", "shes", "xes", "zes"].iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 2].to_string();
        }
        if !["les", "res", "tes", "nes", "mes", "pes"]
            .iter()
            .any(|s| word.ends_with(s))
        {
            return word[..word.len() - 1].to_string();
        }
        return word;
    }
    if word.ends_with('s') && n > 3 {
        if !(word.ends_with("ss") || word.ends_with("us") || word.ends_with("is")) {
            return word[..word.len() - 1].to_string();
        }
        return word;
    }
    if word.ends_with("ed") && n > 4 {
        if word.ends_with("ied") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("ing") && n > 5 {
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("er") && n > 4 {
        if word.ends_with("ier") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("est") && n > 5 {
        if word.ends_with("iest") {
            return format!("{}y", &word[..word.len() - 4]);
        }
        return word[..word.len() - 3].to_string();
    }
    if word.ends_with("ly") && n > 4 {
        if word.ends_with("ily") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("tion") && n > 6 {
        return format!("{}te", &word[..word.len() - 4]);
    }
    if word.ends_with("sion") && n > 6 {
        return format!("{}de", &word[..word.len() - 4]);
    }
    if word.ends_with("ness") && n > 6 {
        return word[..word.len() - 4].to_string();
    }
    if word.ends_with("ment") && n > 6 {
        return word[..word.len() - 4].to_string();
    }
    word
}

/// Applies contraction expansion and then per-token morphology. When both
/// morphology flags are set, lemmatization wins.
pub(crate) fn normalize_text(text: &str, options: &CleaningOptions) -> String {
    let expanded = expand_contractions(text);
    expanded
        .split_whitespace()
        .map(|token| {
            if options.use_lemmatization {
                lemmatize(token)
            } else if options.use_stemming {
                stem(token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contractions_expand_in_table_order() {
        assert_eq!(expand_contractions("won't"), "will not");
        assert_eq!(expand_contractions("can't"), "cannot");
        assert_eq!(expand_contractions("don't stop"), "do not stop");
        assert_eq!(expand_contractions("it's here"), "it is here");
        assert_eq!(expand_contractions("they're let's"), "they are let us");
    }

    #[test]
    fn stemming_drops_common_suffixes() {
        assert_eq!(stem("running"), "runn");
        assert_eq!(stem("jumped"), "jump");
        assert_eq!(stem("smaller"), "small");
        assert_eq!(stem("brightest"), "bright");
        assert_eq!(stem("quickly"), "quick");
        assert_eq!(stem("creation"), "create");
        assert_eq!(stem("happiness"), "happi");
    }

    #[test]
    fn stemming_respects_length_guards() {
        assert_eq!(stem("sing"), "sing");
        assert_eq!(stem("red"), "red");
        assert_eq!(stem("her"), "her");
        assert_eq!(stem("best"), "best");
        assert_eq!(stem("fly"), "fly");
    }

    #[test]
    fn stemming_lowercases_first() {
        assert_eq!(stem("Running"), "runn");
        assert_eq!(stem("QUICKLY"), "quick");
    }

    #[test]
    fn lemmatizer_prefers_the_dictionary() {
        assert_eq!(lemmatize("went"), "go");
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("better"), "good");
        assert_eq!(lemmatize("running"), "run");
        assert_eq!(lemmatize("mice"), "mouse");
    }

    #[test]
    fn lemmatizer_suffix_rules() {
        assert_eq!(lemmatize("studies"), "study");
        assert_eq!(lemmatize("wolves"), "wolf");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("cats"), "cat");
        assert_eq!(lemmatize("tried"), "try");
        assert_eq!(lemmatize("walked"), "walk");
        assert_eq!(lemmatize("happier"), "happy");
        assert_eq!(lemmatize("happiest"), "happy");
        assert_eq!(lemmatize("happily"), "happy");
        assert_eq!(lemmatize("decision"), "decide");
        assert_eq!(lemmatize("movement"), "move");
    }

    #[test]
    fn es_branch_never_falls_through() {
        // "tables" enters the `es` branch, is excluded by the `les` guard,
        // and must come back unchanged rather than losing its final `s`.
        assert_eq!(lemmatize("tables"), "tables");
        assert_eq!(lemmatize("watches"), "watch");
        assert_eq!(lemmatize("wishes"), "wish");
    }

    #[test]
    fn final_s_guards() {
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("campus"), "campus");
        assert_eq!(lemmatize("basis"), "basis");
        assert_eq!(lemmatize("bus"), "bus");
    }

    #[test]
    fn normalization_applies_one_morphology() {
        let stemmed = normalize_text("running quickly", &CleaningOptions::default());
        assert_eq!(stemmed, "runn quick");

        let lemma_opts = CleaningOptions {
            use_stemming: false,
            use_lemmatization: true,
            ..CleaningOptions::default()
        };
        assert_eq!(normalize_text("running quickly", &lemma_opts), "run quick");

        let both = CleaningOptions {
            use_stemming: true,
            use_lemmatization: true,
            ..CleaningOptions::default()
        };
        assert_eq!(normalize_text("running", &both), "run");

        let neither = CleaningOptions {
            use_stemming: false,
            use_lemmatization: false,
            ..CleaningOptions::default()
        };
        assert_eq!(normalize_text("Running Quickly", &neither), "Running Quickly");
    }
}
