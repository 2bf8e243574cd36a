// awal-correct: apply the silent auto-correct decision to words.
//
// Prints one word per input line: the high-confidence replacement when one
// exists, otherwise the word unchanged. Words already in the dictionary
// are never touched. Suitable for piping transcribed text through.
//
// Usage:
//   awal-correct [-d DICT_DIR] [-l LANG] [WORD...]

use std::io::{self, BufRead, Write};

use awal_engine::CorrectionEngine;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = awal_cli::parse_dict_path(&args);
    let (language, args) = awal_cli::parse_language(&args);

    if awal_cli::wants_help(&args) {
        println!("awal-correct: silent auto-correction of words.");
        println!();
        println!("Usage: awal-correct [-d DICT_DIR] [-l LANG] [WORD...]");
        println!();
        println!("Prints the auto-correct replacement for each word, or the");
        println!("word unchanged when no candidate clears the confidence bar.");
        println!("Reads stdin (one word per line) when no WORD is given.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Directory containing dictionary files");
        println!("  -l, --language CODE   Language code (fr, ar, en, shi, shi-latn)");
        println!("  -h, --help            Print this help");
        return;
    }

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let dict_dir = awal_cli::find_dict_dir(dict_path.as_deref());
    let mut engine = CorrectionEngine::new(dict_dir);
    engine.set_language(language);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let correct_word =
        |word: &str, engine: &CorrectionEngine, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
            if engine.is_known(word, language) {
                let _ = writeln!(out, "{word}");
                return;
            }
            match engine.top_correction(word, language) {
                Some(replacement) => {
                    let _ = writeln!(out, "{replacement}");
                }
                None => {
                    let _ = writeln!(out, "{word}");
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
            correct_word(word, &engine, &mut out);
        }
    } else {
        for word in &words {
            correct_word(word, &engine, &mut out);
        }
    }
}
