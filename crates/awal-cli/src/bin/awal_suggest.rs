// awal-suggest: ranked correction suggestions for words from stdin or args.
//
// Words already in the dictionary are printed as-is with a "(correct)"
// marker; everything else gets its ranked suggestion list.
//
// Usage:
//   awal-suggest [-d DICT_DIR] [-l LANG] [-n N] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Directory containing the dictionary files
//   -l, --language CODE      Language code (fr, ar, en, shi, shi-latn)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use awal_engine::CorrectionEngine;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = awal_cli::parse_dict_path(&args);
    let (language, args) = awal_cli::parse_language(&args);

    if awal_cli::wants_help(&args) {
        println!("awal-suggest: ranked correction suggestions.");
        println!();
        println!("Usage: awal-suggest [-d DICT_DIR] [-l LANG] [-n N] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Directory containing dictionary files");
        println!("  -l, --language CODE      Language code (fr, ar, en, shi, shi-latn)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| awal_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                awal_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let dict_dir = awal_cli::find_dict_dir(dict_path.as_deref());
    let mut engine = CorrectionEngine::new(dict_dir);
    engine.set_language(language);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word =
        |word: &str, engine: &CorrectionEngine, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
            if engine.is_known(word, language) {
                let _ = writeln!(out, "{word} (correct)");
            } else {
                let suggestions = engine.suggestions(word, language, max_suggestions);
                if suggestions.is_empty() {
                    let _ = writeln!(out, "{word}: (no suggestions)");
                } else {
                    let _ = writeln!(out, "{word}:");
                    for s in &suggestions {
                        let _ = writeln!(out, "  {s}");
                    }
                }
            }
        };

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
            suggest_word(word, &engine, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &engine, &mut out);
        }
    }
}
