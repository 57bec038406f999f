use std::io::Write as _;

use serde_json::json;
use wordchain::dictionary::WordSource;
use wordchain::response::{ChainData, Response};
use wordchain::search::SearchOptions;

const WORDS: &str = "cat\ncot\ncog\ndog\ndot\n";

struct CountingSource {
    opens: std::sync::atomic::AtomicUsize,
    words: &'static str,
}

impl CountingSource {
    fn new(words: &'static str) -> Self {
        Self {
            opens: std::sync::atomic::AtomicUsize::new(0),
            words,
        }
    }

    fn opens(&self) -> usize {
        self.opens.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl WordSource for CountingSource {
    fn open(&self) -> std::io::Result<Box<dyn std::io::BufRead + '_>> {
        self.opens.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(Box::new(std::io::Cursor::new(self.words.as_bytes())))
    }
}

fn params(first: &str, last: &str) -> serde_json::Value {
    json!({ "firstWord": first, "lastWord": last })
}

fn adjacent(a: &str, b: &str) -> bool {
    if a.len() == b.len() {
        a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
    } else {
        let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };
        long.len() == short.len() + 1 && long.starts_with(short)
    }
}

#[test]
fn builds_the_chain_end_to_end() {
    let response = wordchain::build_chain(&params("cat", "dog"), &WORDS, &Default::default());

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "success": true,
            "error": "",
            "data": ["cat", "cot", "dot", "dog"],
        })
    );
}

#[test]
fn normalizes_case() {
    let shouting = wordchain::build_chain(&params("CAT", "DOG"), &WORDS, &Default::default());
    let plain = wordchain::build_chain(&params("cat", "dog"), &WORDS, &Default::default());

    assert_eq!(shouting, plain);
}

#[test]
fn repeated_requests_return_the_same_chain() {
    let first = wordchain::build_chain(&params("cat", "dog"), &WORDS, &Default::default());
    let second = wordchain::build_chain(&params("cat", "dog"), &WORDS, &Default::default());

    assert_eq!(first, second);
}

#[test]
fn reports_the_sentinel_when_no_chain_exists() {
    let response = wordchain::build_chain(
        &params("cat", "dog"),
        &"cat\ncot\ncog\n",
        &Default::default(),
    );

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "success": true,
            "error": "",
            "data": "Word chain not found",
        })
    );
}

#[test]
fn validation_failures_never_touch_the_dictionary() {
    let cases = [
        (json!({}), "firstWord and lastWord are required"),
        (
            json!({ "firstWord": "cat" }),
            "firstWord and lastWord are required",
        ),
        (
            json!({ "firstWord": "cat", "lastWord": 7 }),
            "firstWord and lastWord must be strings",
        ),
        (
            json!({ "firstWord": "c-t", "lastWord": "dog" }),
            "firstWord and lastWord can only contain letters",
        ),
        (
            json!({ "firstWord": "Dog", "lastWord": "dog" }),
            "firstWord and lastWord must be different",
        ),
    ];

    for (request, error) in cases {
        let source = CountingSource::new(WORDS);
        let response = wordchain::build_chain(&request, &source, &Default::default());

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": error, "data": null }),
            "{request}"
        );
        assert_eq!(source.opens(), 0, "{request}");
    }
}

#[test]
fn unreadable_dictionary_is_an_internal_error_not_a_missing_chain() {
    let source = wordchain::dictionary::FileSource::new("data/no-such-dictionary.txt");
    let response = wordchain::build_chain(&params("cat", "dog"), &source, &Default::default());

    assert!(!response.success);
    assert!(
        response.error.starts_with("internal error"),
        "{}",
        response.error
    );
    assert_eq!(response.data, None);
}

#[test]
fn reads_the_dictionary_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WORDS.as_bytes()).unwrap();

    let source = wordchain::dictionary::FileSource::new(file.path());
    let response = wordchain::build_chain(&params("cat", "dog"), &source, &Default::default());

    assert_eq!(
        response,
        Response::chain(
            ["cat", "cot", "dot", "dog"]
                .iter()
                .map(|word| word.to_string())
                .collect()
        )
    );
}

#[test]
fn bridges_unequal_word_lengths_both_ways() {
    let words = "cat\ncot\ncots\n";

    let growing = wordchain::build_chain(&params("cat", "cots"), &words, &Default::default());
    assert_eq!(
        serde_json::to_value(&growing).unwrap(),
        json!({ "success": true, "error": "", "data": ["cat", "cot", "cots"] })
    );

    let shrinking = wordchain::build_chain(&params("cots", "cat"), &words, &Default::default());
    assert_eq!(
        serde_json::to_value(&shrinking).unwrap(),
        json!({ "success": true, "error": "", "data": ["cots", "cot", "cat"] })
    );
}

#[test]
fn bidirectional_search_finds_a_valid_chain() {
    let options = SearchOptions {
        bidirectional: true,
        ..Default::default()
    };
    let response = wordchain::build_chain(&params("cat", "dog"), &WORDS, &options);

    assert!(response.success);
    let Some(ChainData::Chain(chain)) = response.data else {
        panic!("expected a chain");
    };
    assert_eq!(chain.first().map(String::as_str), Some("cat"));
    assert_eq!(chain.last().map(String::as_str), Some("dog"));
    for pair in chain.windows(2) {
        assert!(adjacent(&pair[0], &pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn step_budget_turns_into_the_no_chain_outcome() {
    let options = SearchOptions {
        max_steps: Some(1),
        ..Default::default()
    };
    let response = wordchain::build_chain(&params("cat", "dog"), &WORDS, &options);

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "success": true,
            "error": "",
            "data": "Word chain not found",
        })
    );
}
