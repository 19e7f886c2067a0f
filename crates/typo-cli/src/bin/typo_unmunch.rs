// typo-unmunch: Expand a dictionary into every derived form.
//
// Prints each surface form the affix rules derive from the dictionary
// stems, one per line, in dictionary order. With WORD arguments only
// those stems are expanded.
//
// Usage:
//   typo-unmunch [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Directory holding LANG.aff and LANG.dic
//   -l, --lang LANG        Dictionary name (default: en_US)
//   --group                Print one line per stem: `stem: form form ...`
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = typo_cli::parse_dict_path(&args);
    let (lang, args) = typo_cli::parse_lang(&args);

    if typo_cli::wants_help(&args) {
        println!("typo-unmunch: Expand a dictionary into every derived form.");
        println!();
        println!("Usage: typo-unmunch [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory holding LANG.aff and LANG.dic");
        println!("  -l, --lang LANG        Dictionary name (default: {})", typo_cli::DEFAULT_LANG);
        println!("  --group                Print one line per stem");
        println!("  -h, --help             Print this help");
        return;
    }

    let args = typo_cli::init_logging(&args);
    let group = args.iter().any(|a| a == "--group");
    let stems: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let handle = typo_cli::load_handle(dict_path.as_deref(), &lang).unwrap_or_else(|e| typo_cli::fatal(&e));
    let lexicon = handle.lexicon().unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let selected = lexicon
        .dictionary()
        .entries()
        .iter()
        .filter(|entry| stems.is_empty() || stems.iter().any(|s| **s == entry.stem));

    let mut total = 0usize;
    for entry in selected {
        let forms = lexicon.expand(entry);
        total += forms.len();
        if group {
            let _ = writeln!(out, "{}: {}", entry.stem, forms.join(" "));
        } else {
            for form in forms {
                let _ = writeln!(out, "{form}");
            }
        }
    }
    log::info!("{total} forms from {} stems", lexicon.dictionary().len());
}
