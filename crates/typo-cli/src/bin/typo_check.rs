// typo-check: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   typo-check [-d DICT_PATH] [-l LANG] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Directory holding LANG.aff and LANG.dic
//   -l, --lang LANG        Dictionary name (default: en_US)
//   -s, --suggest          Also print suggestions for misspelled words
//   -v, --verbose          More log output (repeatable)
//   -q, --quiet            Only log errors
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = typo_cli::parse_dict_path(&args);
    let (lang, args) = typo_cli::parse_lang(&args);

    if typo_cli::wants_help(&args) {
        println!("typo-check: Check spelling of words from stdin.");
        println!();
        println!("Usage: typo-check [-d DICT_PATH] [-l LANG] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory holding LANG.aff and LANG.dic");
        println!("  -l, --lang LANG        Dictionary name (default: {})", typo_cli::DEFAULT_LANG);
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -v, --verbose          More log output (repeatable)");
        println!("  -q, --quiet            Only log errors");
        println!("  -h, --help             Print this help");
        return;
    }

    let args = typo_cli::init_logging(&args);
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let handle = typo_cli::load_handle(dict_path.as_deref(), &lang).unwrap_or_else(|e| typo_cli::fatal(&e));
    let limit = handle.options().max_suggestions;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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

        let correct = handle.check(word).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
        if correct {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                let suggestions = handle.suggest(word, limit).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
                for suggestion in suggestions {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
