// awal-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use awal_core::Language;
use awal_engine::profile::profile;

/// Search for a dictionary directory.
///
/// Search order:
/// 1. `dict_dir` argument (if provided)
/// 2. `AWAL_DICT_PATH` environment variable
/// 3. `~/.awal/dictionaries`
/// 4. `/usr/share/awal/dictionaries`
/// 5. Current working directory
///
/// A directory qualifies when it holds at least one per-language dictionary
/// file. Returns `None` when nothing is found — the engine then answers
/// from its built-in fallback vocabularies.
pub fn find_dict_dir(dict_dir: Option<&str>) -> Option<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = dict_dir {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var("AWAL_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".awal").join("dictionaries"));
    }
    paths.push(PathBuf::from("/usr/share/awal/dictionaries"));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths.into_iter().find(|dir| {
        Language::ALL
            .iter()
            .any(|l| dir.join(profile(*l).dictionary_filename).is_file())
    })
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` / `--dict-path PATH` / `-d PATH` argument.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse a `--language CODE` / `-l CODE` argument. Defaults to French.
///
/// Returns `(language, remaining_args)`.
pub fn parse_language(args: &[String]) -> (Language, Vec<String>) {
    let mut language = Language::DEFAULT;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--language" || arg == "-l" {
            if i + 1 < args.len() {
                language = language_from_code(&args[i + 1]);
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (language, remaining)
}

/// Resolve a language code, exiting with the list of valid codes on an
/// unknown one (the library's silent fallback would hide typos here).
fn language_from_code(code: &str) -> Language {
    if Language::ALL.iter().any(|l| l.code() == code) {
        Language::from_code(code)
    } else {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        fatal(&format!(
            "unknown language code {code:?}; expected one of: {}",
            codes.join(", ")
        ));
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_dict_path_extracts_flag_forms() {
        let (path, rest) = parse_dict_path(&strings(&["--dict-path=/tmp/d", "mot"]));
        assert_eq!(path.as_deref(), Some("/tmp/d"));
        assert_eq!(rest, strings(&["mot"]));

        let (path, rest) = parse_dict_path(&strings(&["-d", "/tmp/d", "mot"]));
        assert_eq!(path.as_deref(), Some("/tmp/d"));
        assert_eq!(rest, strings(&["mot"]));
    }

    #[test]
    fn parse_language_defaults_to_french() {
        let (lang, rest) = parse_language(&strings(&["bonjour"]));
        assert_eq!(lang, Language::French);
        assert_eq!(rest, strings(&["bonjour"]));
    }

    #[test]
    fn parse_language_reads_code() {
        let (lang, rest) = parse_language(&strings(&["-l", "shi-latn", "azul"]));
        assert_eq!(lang, Language::TachelhitLatin);
        assert_eq!(rest, strings(&["azul"]));
    }

    #[test]
    fn wants_help_detects_both_spellings() {
        assert!(wants_help(&strings(&["-h"])));
        assert!(wants_help(&strings(&["--help"])));
        assert!(!wants_help(&strings(&["mot"])));
    }
}
