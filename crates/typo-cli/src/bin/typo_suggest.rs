// typo-suggest: Generate spelling suggestions.
//
// Suggests corrections for each WORD argument, or for words read from
// stdin (one per line). Correctly spelled words are printed as-is.
//
// Usage:
//   typo-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Directory holding LANG.aff and LANG.dic
//   -l, --lang LANG           Dictionary name (default: en_US)
//   -n, --max-suggestions N   Maximum number of suggestions (default: 5)
//   -e, --max-distance N      Maximum edit distance (default: 2)
//   --scores                  Print distance and frequency weight
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use typo_spell::TypoHandle;

fn parse_number(value: Option<String>, what: &str) -> Option<usize> {
    value.map(|v| {
        v.parse()
            .unwrap_or_else(|_| typo_cli::fatal(&format!("invalid number for {what}")))
    })
}

fn suggest_word(word: &str, handle: &TypoHandle, scores: bool, out: &mut impl Write) {
    let correct = handle.check(word).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
    if correct {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let limit = handle.options().max_suggestions;
    let suggestions = handle
        .suggest_detailed(word, limit)
        .unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
        return;
    }
    let _ = writeln!(out, "{word}:");
    for s in &suggestions {
        if scores {
            let _ = writeln!(out, "  {}\t{}\t{}", s.word, s.distance, s.weight);
        } else {
            let _ = writeln!(out, "  {}", s.word);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = typo_cli::parse_dict_path(&args);
    let (lang, args) = typo_cli::parse_lang(&args);

    if typo_cli::wants_help(&args) {
        println!("typo-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: typo-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Directory holding LANG.aff and LANG.dic");
        println!("  -l, --lang LANG          Dictionary name (default: {})", typo_cli::DEFAULT_LANG);
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -e, --max-distance N     Maximum edit distance (default: 2)");
        println!("  --scores                 Print distance and frequency weight");
        println!("  -h, --help               Print this help");
        return;
    }

    let (max_suggestions, args) = typo_cli::take_option(&args, "-n", "--max-suggestions");
    let (max_distance, args) = typo_cli::take_option(&args, "-e", "--max-distance");
    let max_suggestions = parse_number(max_suggestions, "--max-suggestions");
    let max_distance = parse_number(max_distance, "--max-distance");

    let args = typo_cli::init_logging(&args);
    let scores = args.iter().any(|a| a == "--scores");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let mut handle = typo_cli::load_handle(dict_path.as_deref(), &lang).unwrap_or_else(|e| typo_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        handle.set_max_suggestions(n);
    }
    if let Some(n) = max_distance {
        handle.set_max_edit_distance(n);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, scores, &mut out);
        }
    } else {
        for word in words {
            suggest_word(word, &handle, scores, &mut out);
        }
    }
}
