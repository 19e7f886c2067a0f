// typo-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::Builder;
use log::{LevelFilter, debug};
use typo_spell::TypoHandle;

/// Dictionary used when no `--lang` is given.
pub const DEFAULT_LANG: &str = "en_US";

/// Optional frequency list looked up next to the affix file.
const WORDLIST_FILE: &str = "wordlist.txt";

/// Optional prefix normalization rules looked up next to the affix file.
const PREFIX_RULES_FILE: &str = "prefixes.tsv";

/// Files making up one dictionary on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictFiles {
    pub affix: PathBuf,
    pub dictionary: PathBuf,
    pub wordlist: Option<PathBuf>,
    pub prefix_rules: Option<PathBuf>,
}

impl DictFiles {
    /// Look for `<lang>.aff` and `<lang>.dic` directly in `dir`.
    fn in_dir(dir: &Path, lang: &str) -> Option<Self> {
        let affix = dir.join(format!("{lang}.aff"));
        let dictionary = dir.join(format!("{lang}.dic"));
        if !affix.is_file() || !dictionary.is_file() {
            return None;
        }
        let optional = |name: &str| Some(dir.join(name)).filter(|p| p.is_file());
        Some(Self {
            affix,
            dictionary,
            wordlist: optional(WORDLIST_FILE),
            prefix_rules: optional(PREFIX_RULES_FILE),
        })
    }
}

/// Search for the dictionary files of `lang`.
///
/// Each search root is tried as `<root>/<lang>/` and then as `<root>/`.
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TYPO_DICT_PATH` environment variable
/// 3. `~/.typo/dictionaries`
/// 4. System hunspell and myspell directories
/// 5. `./dictionaries`, then the current working directory
pub fn find_dictionary(dict_path: Option<&str>, lang: &str) -> Result<DictFiles, String> {
    let search_paths = build_search_paths(dict_path);

    for root in &search_paths {
        for dir in [root.join(lang), root.clone()] {
            if let Some(files) = DictFiles::in_dir(&dir, lang) {
                debug!("using dictionary in {}", dir.display());
                return Ok(files);
            }
        }
    }

    Err(format!(
        "could not find {lang}.aff and {lang}.dic in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Find the dictionary files of `lang` and build a loaded handle.
pub fn load_handle(dict_path: Option<&str>, lang: &str) -> Result<TypoHandle, String> {
    let files = find_dictionary(dict_path, lang)?;
    load_files(&files)
}

/// Read every file in `files` and build a loaded handle.
pub fn load_files(files: &DictFiles) -> Result<TypoHandle, String> {
    let affix = read_text(&files.affix)?;
    let dictionary = read_text(&files.dictionary)?;
    let wordlist = files.wordlist.as_deref().map(read_text).transpose()?;

    let mut handle = TypoHandle::load(&affix, &dictionary, wordlist.as_deref())
        .map_err(|e| format!("failed to load {}: {e}", files.affix.display()))?;
    if let Some(path) = &files.prefix_rules {
        handle.set_prefix_rules(&read_text(path)?);
    }
    Ok(handle)
}

fn read_text(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. TYPO_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("TYPO_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory paths
    if let Some(home) = home_dir() {
        paths.push(home.join(".typo").join("dictionaries"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    // 4. System paths
    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/local/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("dictionaries"));
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

/// Remove `--NAME=VALUE`, `--NAME VALUE`, or `-S VALUE` from `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(prefix.as_str()) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "-d", "--dict-path")
}

/// Parse a `--lang=LANG` or `-l LANG` argument, defaulting to [`DEFAULT_LANG`].
pub fn parse_lang(args: &[String]) -> (String, Vec<String>) {
    let (lang, rest) = take_option(args, "-l", "--lang");
    (lang.unwrap_or_else(|| DEFAULT_LANG.to_string()), rest)
}

/// Level for a count of `-v` flags; `-q` silences everything but errors.
fn level_filter(verbose: usize, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Strip `-v`/`--verbose` and `-q`/`--quiet` from `args` and set up logging
/// on stderr accordingly. Returns the remaining args.
pub fn init_logging(args: &[String]) -> Vec<String> {
    let verbose = args.iter().filter(|a| *a == "-v" || *a == "--verbose").count();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");

    Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    args.iter()
        .filter(|a| !matches!(a.as_str(), "-v" | "--verbose" | "-q" | "--quiet"))
        .cloned()
        .collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
