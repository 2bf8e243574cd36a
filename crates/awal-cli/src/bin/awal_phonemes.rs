// awal-phonemes: print the canonical phoneme folding of words.
//
// Debugging aid for the per-language rule tables: two words that should be
// treated as sounding alike must print the same folded string.
//
// Usage:
//   awal-phonemes [-l LANG] [WORD...]

use std::io::{self, BufRead, Write};

use awal_engine::phonetic;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, args) = awal_cli::parse_language(&args);

    if awal_cli::wants_help(&args) {
        println!("awal-phonemes: print canonical phoneme foldings.");
        println!();
        println!("Usage: awal-phonemes [-l LANG] [WORD...]");
        println!();
        println!("Reads stdin (one word per line) when no WORD is given.");
        println!();
        println!("Options:");
        println!("  -l, --language CODE  Language code (fr, ar, en, shi, shi-latn)");
        println!("  -h, --help           Print this help");
        return;
    }

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let fold_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let _ = writeln!(out, "{word}: {}", phonetic::fold(word, language));
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
            fold_word(word, &mut out);
        }
    } else {
        for word in &words {
            fold_word(word, &mut out);
        }
    }
}
