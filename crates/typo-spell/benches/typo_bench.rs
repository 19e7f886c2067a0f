// Criterion benchmarks for typo-spell.
//
// Uses the fixture dictionary under tests/data by default. Set
// TYPO_DICT_PATH to a directory holding `index.aff` and `index.dic` to
// benchmark a real dictionary instead.
//
// Run:
//   cargo bench -p typo-spell
//   TYPO_DICT_PATH=/path/to/dict cargo bench -p typo-spell

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use typo_spell::speller::{PrefixRules, WordValidator};
use typo_spell::{Lexicon, TypoHandle};

// ---------------------------------------------------------------------------
// Data discovery
// ---------------------------------------------------------------------------

fn data_dir() -> (PathBuf, &'static str, &'static str) {
    if let Ok(dir) = std::env::var("TYPO_DICT_PATH") {
        let dir = PathBuf::from(dir);
        if dir.join("index.aff").is_file() && dir.join("index.dic").is_file() {
            return (dir, "index.aff", "index.dic");
        }
        eprintln!("TYPO_DICT_PATH has no index.aff/index.dic, using fixtures");
    }
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    (dir, "sample.aff", "sample.dic")
}

fn load_texts() -> (String, String) {
    let (dir, aff, dic) = data_dir();
    let read = |name: &str| {
        std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
    };
    (read(aff), read(dic))
}

const WORDS: &[&str] = &[
    "hello", "helo", "ponies", "ponys", "unlock", "locked", "football", "scissors", "NASA", "nasa",
    "Hello", "baked", "mouses", "alot", "fone", "cats", "held", "toys",
];

const MISSPELLED: &[&str] = &["helo", "ponys", "alot", "fone", "Helo"];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Compile affix and dictionary text into a loaded handle.
fn bench_load(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    c.bench_function("load", |b| {
        b.iter(|| std::hint::black_box(TypoHandle::load(&aff, &dic, None).expect("load")));
    });
}

/// Validate a word set without the result cache.
fn bench_validate_uncached(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    let handle = TypoHandle::load(&aff, &dic, None).expect("load");
    let lexicon: &Lexicon = handle.lexicon().expect("lexicon");
    let prefixes = PrefixRules::new();
    let validator = WordValidator::new(lexicon, &prefixes);

    c.bench_function("validate_words_uncached", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(validator.check(word));
            }
        });
    });
}

/// Validate a word set through the handle, mostly cache hits.
fn bench_check_cached(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    let handle = TypoHandle::load(&aff, &dic, None).expect("load");

    c.bench_function("check_words_cached", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(handle.check(word).expect("check"));
            }
        });
    });
}

/// Suggest on a fresh handle each round so ranking is measured.
fn bench_suggest_misspelled(c: &mut Criterion) {
    let (aff, dic) = load_texts();

    c.bench_function("suggest_misspelled", |b| {
        b.iter_batched(
            || TypoHandle::load(&aff, &dic, None).expect("load"),
            |handle| {
                for word in MISSPELLED {
                    std::hint::black_box(handle.suggest(word, 5).expect("suggest"));
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_validate_uncached,
    bench_check_cached,
    bench_suggest_misspelled,
);
criterion_main!(benches);
