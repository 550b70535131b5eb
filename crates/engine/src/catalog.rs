//! Process-wide read-only tables shared by the pipeline stages.
//!
//! Every table is initialized once on first use and never mutated, so all
//! stages and all threads reference them without synchronization.

use fxhash::{FxHashMap, FxHashSet};
use once_cell::sync::Lazy;

/// Emoticon glyphs the pipeline can protect, longest pattern first so that
/// `:-)` wins over `:)` when both match at the same position.
pub(crate) static EMOTICONS: &[&str] = &[
    ":-)", ":-(", ":-D", ":-P", ":-/", ":-|", ":'(", ":')", ";-)", "</3", ":)", ":(", ":D", ":P",
    ":/", ":|", ":O", ";)", "=)", "=(", "<3",
];

/// Contraction expansions applied in order during normalization. `won't` and
/// `can't` precede the generic `n't` rule so they expand correctly.
pub(crate) static CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'m", " am"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("what's", "what is"),
    ("where's", "where is"),
    ("how's", "how is"),
    ("let's", "let us"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("couldn't", "could not"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
];

static STOP_WORD_LIST: &[&str] = &[
    // pronouns
    "i",
    "me",
    "my",
    "myself",
    "we",
    "our",
    "ours",
    "ourselves",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
    "he",
    "him",
    "his",
    "himself",
    "she",
    "her",
    "hers",
    "herself",
    "it",
    "its",
    "itself",
    "they",
    "them",
    "their",
    "theirs",
    "themselves",
    // question words
    "what",
    "which",
    "who",
    "whom",
    "whose",
    "when",
    "where",
    "why",
    "how",
    // demonstratives
    "this",
    "that",
    "these",
    "those",
    // articles
    "a",
    "an",
    "the",
    // conjunctions
    "and",
    "but",
    "or",
    "nor",
    "for",
    "yet",
    "so",
    "because",
    "since",
    "as",
    "while",
    "although",
    "though",
    "unless",
    "until",
    "if",
    "whether",
    // prepositions
    "of",
    "at",
    "by",
    "with",
    "about",
    "against",
    "between",
    "into",
    "through",
    "during",
    "before",
    "after",
    "above",
    "below",
    "up",
    "down",
    "in",
    "out",
    "on",
    "off",
    "over",
    "under",
    "to",
    "from",
    // auxiliaries
    "am",
    "is",
    "are",
    "was",
    "were",
    "be",
    "been",
    "being",
    "have",
    "has",
    "had",
    "having",
    "do",
    "does",
    "did",
    "doing",
    "will",
    "would",
    "could",
    "should",
    "may",
    "might",
    "must",
    "can",
    "shall",
    // adverbs
    "again",
    "further",
    "then",
    "once",
    "here",
    "there",
    "now",
    "just",
    "only",
    "very",
    "too",
    "than",
    "quite",
    "rather",
    "really",
    "actually",
    "already",
    "still",
    "also",
    "even",
    "almost",
    "enough",
    "exactly",
    "hardly",
    "nearly",
    // quantifiers
    "all",
    "any",
    "both",
    "each",
    "few",
    "more",
    "most",
    "other",
    "some",
    "such",
    "no",
    "not",
    "own",
    "same",
    "many",
    "much",
    "little",
    "less",
    "least",
    "several",
    "every",
    "either",
    "neither",
    // discourse
    "yes",
    "maybe",
    "perhaps",
    "however",
    "therefore",
    "thus",
    "hence",
    "moreover",
    "furthermore",
    "nevertheless",
    "nonetheless",
    "meanwhile",
    "otherwise",
    "instead",
    "besides",
    "additionally",
    "finally",
    "eventually",
];

/// Irregular forms resolved before the suffix rules get a chance.
static LEMMA_LIST: &[(&str, &str)] = &[
    // irregular verbs
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("had", "have"),
    ("has", "have"),
    ("having", "have"),
    ("did", "do"),
    ("does", "do"),
    ("doing", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("going", "go"),
    ("came", "come"),
    ("coming", "come"),
    ("said", "say"),
    ("saying", "say"),
    ("got", "get"),
    ("getting", "get"),
    ("made", "make"),
    ("making", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("taking", "take"),
    ("saw", "see"),
    ("seen", "see"),
    ("seeing", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("knowing", "know"),
    ("thought", "think"),
    ("thinking", "think"),
    ("felt", "feel"),
    ("feeling", "feel"),
    ("found", "find"),
    ("finding", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("giving", "give"),
    ("left", "leave"),
    ("leaving", "leave"),
    ("told", "tell"),
    ("telling", "tell"),
    ("became", "become"),
    ("becoming", "become"),
    ("brought", "bring"),
    ("bringing", "bring"),
    ("bought", "buy"),
    ("buying", "buy"),
    ("caught", "catch"),
    ("catching", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("choosing", "choose"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("drawing", "draw"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("driving", "drive"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("eating", "eat"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("falling", "fall"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("flying", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("forgetting", "forget"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("growing", "grow"),
    ("heard", "hear"),
    ("hearing", "hear"),
    ("held", "hold"),
    ("holding", "hold"),
    ("kept", "keep"),
    ("keeping", "keep"),
    ("led", "lead"),
    ("leading", "lead"),
    ("learned", "learn"),
    ("learnt", "learn"),
    ("learning", "learn"),
    ("lost", "lose"),
    ("losing", "lose"),
    ("meant", "mean"),
    ("meaning", "mean"),
    ("met", "meet"),
    ("meeting", "meet"),
    ("paid", "pay"),
    ("paying", "pay"),
    ("ran", "run"),
    ("running", "run"),
    ("sent", "send"),
    ("sending", "send"),
    ("sold", "sell"),
    ("selling", "sell"),
    ("showed", "show"),
    ("shown", "show"),
    ("showing", "show"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("speaking", "speak"),
    ("spent", "spend"),
    ("spending", "spend"),
    ("stood", "stand"),
    ("standing", "stand"),
    ("taught", "teach"),
    ("teaching", "teach"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("throwing", "throw"),
    ("understood", "understand"),
    ("understanding", "understand"),
    ("won", "win"),
    ("winning", "win"),
    ("wrote", "write"),
    ("written", "write"),
    ("writing", "write"),
    // irregular plurals
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("fish", "fish"),
    // comparatives and superlatives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("furthest", "far"),
    ("farther", "far"),
    ("farthest", "far"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
    ("older", "old"),
    ("oldest", "old"),
    ("elder", "old"),
    ("eldest", "old"),
    ("bigger", "big"),
    ("biggest", "big"),
    ("smaller", "small"),
    ("smallest", "small"),
    ("larger", "large"),
    ("largest", "large"),
    ("longer", "long"),
    ("longest", "long"),
    ("shorter", "short"),
    ("shortest", "short"),
    ("higher", "high"),
    ("highest", "high"),
    ("lower", "low"),
    ("lowest", "low"),
    ("stronger", "strong"),
    ("strongest", "strong"),
    ("weaker", "weak"),
    ("weakest", "weak"),
    ("faster", "fast"),
    ("fastest", "fast"),
    ("slower", "slow"),
    ("slowest", "slow"),
    ("newer", "new"),
    ("newest", "new"),
];

pub(crate) static STOP_WORDS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

pub(crate) static LEMMA_OVERRIDES: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| LEMMA_LIST.iter().copied().collect());

/// Returns true if `word` is in the stop-word table. Comparison is
/// case-insensitive.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_word_lookup_ignores_case() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("The"));
        assert!(is_stop_word("HOWEVER"));
        assert!(!is_stop_word("rust"));
    }

    #[test]
    fn emoticons_are_ordered_longest_first() {
        assert!(EMOTICONS
            .windows(2)
            .all(|pair| pair[0].len() >= pair[1].len()));
    }

    #[test]
    fn specific_negations_precede_generic_rule() {
        let position = |needle: &str| {
            CONTRACTIONS
                .iter()
                .position(|(from, _)| *from == needle)
                .expect("contraction table entry")
        };
        assert!(position("won't") < position("n't"));
        assert!(position("can't") < position("n't"));
    }

    #[test]
    fn lemma_overrides_resolve_irregulars() {
        assert_eq!(LEMMA_OVERRIDES.get("went"), Some(&"go"));
        assert_eq!(LEMMA_OVERRIDES.get("children"), Some(&"child"));
        assert_eq!(LEMMA_OVERRIDES.get("best"), Some(&"good"));
        assert_eq!(LEMMA_OVERRIDES.get("sheep"), Some(&"sheep"));
        assert!(LEMMA_OVERRIDES.get("table").is_none());
    }
}
