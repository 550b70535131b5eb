//! The pipeline is a pure function: identical input and options must give
//! byte-identical output on every call and on every thread.

use std::sync::Arc;
use std::thread;

use textprep::{process_text, CleaningOptions};

const INPUT: &str =
    "Shipping v2.1 today!! :) details at https://example.com or ops@example.com #release";

#[test]
fn repeated_runs_produce_byte_identical_tokens() {
    let options = CleaningOptions::default();
    let first = process_text(INPUT, &options).expect("valid input");
    for _ in 0..50 {
        let again = process_text(INPUT, &options).expect("valid input");
        assert_eq!(first.cleaned_text, again.cleaned_text);
        assert_eq!(first.normalized_text, again.normalized_text);
        assert_eq!(first.tokens, again.tokens);
        assert_eq!(first.stats, again.stats);
    }
}

#[test]
fn concurrent_runs_agree_across_threads() {
    let options = Arc::new(CleaningOptions::default());
    let reference = process_text(INPUT, &options).expect("valid input");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let options = Arc::clone(&options);
            thread::spawn(move || {
                (0..25)
                    .map(|_| process_text(INPUT, &options).expect("valid input"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().expect("worker thread") {
            assert_eq!(result, reference);
        }
    }
}

#[test]
fn every_preset_is_deterministic() {
    for options in [
        CleaningOptions::default(),
        CleaningOptions::strict(),
        CleaningOptions::social_media(),
    ] {
        let first = process_text(INPUT, &options).expect("valid input");
        let second = process_text(INPUT, &options).expect("valid input");
        assert_eq!(first, second);
    }
}
