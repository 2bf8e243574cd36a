// Dictionary loading, caching, and membership.
//
// Each language has one frequency-ranked word list: a UTF-8 text file with
// one word per line, most frequent first. The store reads a language's file
// at most once per process and keeps both the ordered list (rank order
// drives tie-breaking in the ranking pipeline) and a hash set for O(1)
// membership tests. A missing or unreadable file is recovered locally by
// installing the built-in fallback list; callers never see the failure.

pub mod builtin;

use std::fs;
use std::path::PathBuf;

use hashbrown::{HashMap, HashSet};

use awal_core::Language;

use crate::profile::profile;

/// Hard cap on accepted words per language.
pub const MAX_DICTIONARY_WORDS: usize = 50_000;

/// Lines starting with this character are skipped at load.
const COMMENT_MARKER: char = '#';

/// Failure to read a dictionary file. Consumed internally by the fallback
/// path and logged; never propagated to engine callers.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The store was built without a dictionary directory.
    #[error("no dictionary directory configured")]
    NoDirectory,
    /// The per-language file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One language's loaded word list.
pub struct Dictionary {
    /// Words in frequency order (insertion order = rank).
    words: Vec<String>,
    /// Lowercase membership index.
    index: HashSet<String>,
}

impl Dictionary {
    /// Parse dictionary text: trim and lowercase each line, skip blank and
    /// comment lines, stop after [`MAX_DICTIONARY_WORDS`] accepted words.
    pub fn parse(text: &str) -> Self {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in text.lines() {
            if words.len() >= MAX_DICTIONARY_WORDS {
                break;
            }
            let word = line.trim().to_lowercase();
            if word.is_empty() || word.starts_with(COMMENT_MARKER) {
                continue;
            }
            index.insert(word.clone());
            words.push(word);
        }
        Self { words, index }
    }

    fn from_builtin(list: &[&str]) -> Self {
        let words: Vec<String> = list.iter().map(|w| w.to_string()).collect();
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Ordered word list (frequency rank order).
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Number of loaded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Per-language dictionary cache.
///
/// Loads are idempotent and values are immutable once built. The store is
/// not synchronized; the engine confines it behind a `RefCell` to a single
/// owner.
pub struct DictionaryStore {
    /// Directory holding the per-language dictionary files, if any.
    dict_dir: Option<PathBuf>,
    /// Loaded dictionaries, kept for the process lifetime (no eviction —
    /// five bounded lists at most).
    cache: HashMap<Language, Dictionary>,
}

impl DictionaryStore {
    /// Create a store reading from `dict_dir`. With `None` every language
    /// resolves to its built-in fallback list.
    pub fn new(dict_dir: Option<PathBuf>) -> Self {
        Self {
            dict_dir,
            cache: HashMap::new(),
        }
    }

    /// Load a language's dictionary. A no-op when already cached; on read
    /// failure the built-in fallback list is installed instead and the
    /// failure is only logged.
    pub fn load(&mut self, language: Language) {
        if self.cache.contains_key(&language) {
            return;
        }
        let dict = match self.read_from_file(language) {
            Ok(dict) => {
                log::debug!("loaded {} words for {}", dict.len(), language.code());
                dict
            }
            Err(err) => {
                log::warn!(
                    "dictionary unavailable for {}: {err}; using built-in fallback",
                    language.code()
                );
                Dictionary::from_builtin(profile(language).fallback_words)
            }
        };
        self.cache.insert(language, dict);
    }

    fn read_from_file(&self, language: Language) -> Result<Dictionary, DictionaryError> {
        let dir = self.dict_dir.as_ref().ok_or(DictionaryError::NoDirectory)?;
        let path = dir.join(profile(language).dictionary_filename);
        let text = fs::read_to_string(&path)
            .map_err(|source| DictionaryError::Read { path, source })?;
        Ok(Dictionary::parse(&text))
    }

    /// Ordered word list for a language, loading it first if absent.
    pub fn words(&mut self, language: Language) -> &[String] {
        self.load(language);
        self.cache[&language].words()
    }

    /// Case-insensitive membership test, loading first if absent.
    pub fn contains(&mut self, word: &str, language: Language) -> bool {
        self.load(language);
        self.cache[&language].contains(word)
    }

    /// Install dictionary text handed in by the host (same parsing rules as
    /// the file path), replacing any cached dictionary for the language.
    /// Used by hosts without filesystem access, such as the wasm surface.
    pub fn install_words(&mut self, language: Language, text: &str) {
        self.cache.insert(language, Dictionary::parse(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_trims_lowercases_and_skips_comments() {
        let dict = Dictionary::parse("  Bonjour \n\n# comment\nSALUT\n");
        assert_eq!(dict.words(), ["bonjour", "salut"]);
        assert!(dict.contains("bonjour"));
        assert!(dict.contains("BONJOUR"));
        assert!(!dict.contains("# comment"));
    }

    #[test]
    fn parse_preserves_line_order_as_rank() {
        let dict = Dictionary::parse("premier\nsecond\ntroisième\n");
        assert_eq!(dict.words(), ["premier", "second", "troisième"]);
    }

    #[test]
    fn parse_caps_accepted_words() {
        let text: String = (0..MAX_DICTIONARY_WORDS + 100)
            .map(|i| format!("word{i}\n"))
            .collect();
        let dict = Dictionary::parse(&text);
        assert_eq!(dict.len(), MAX_DICTIONARY_WORDS);
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let mut store = DictionaryStore::new(None);
        let words = store.words(Language::French);
        assert!(!words.is_empty());
        assert!(store.contains("bonjour", Language::French));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DictionaryStore::new(Some(dir.path().to_path_buf()));
        assert!(store.contains("hello", Language::English));
    }

    #[test]
    fn load_reads_the_per_language_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr_words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "bonjour\nsalut\n# pas un mot").unwrap();
        drop(file);

        let mut store = DictionaryStore::new(Some(dir.path().to_path_buf()));
        assert_eq!(store.words(Language::French), ["bonjour", "salut"]);
        assert!(store.contains("salut", Language::French));
        assert!(!store.contains("merci", Language::French));
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_words.txt");
        std::fs::write(&path, "hello\nworld\n").unwrap();

        let mut store = DictionaryStore::new(Some(dir.path().to_path_buf()));
        store.load(Language::English);
        let first: Vec<String> = store.words(Language::English).to_vec();

        // Rewriting the file must not change the cached dictionary.
        std::fs::write(&path, "changed\n").unwrap();
        store.load(Language::English);
        assert_eq!(store.words(Language::English), first.as_slice());
    }

    #[test]
    fn install_words_replaces_the_cache() {
        let mut store = DictionaryStore::new(None);
        store.load(Language::English);
        store.install_words(Language::English, "alpha\nbeta\n");
        assert_eq!(store.words(Language::English), ["alpha", "beta"]);
        assert!(store.contains("Alpha", Language::English));
    }

    #[test]
    fn languages_are_cached_independently() {
        let mut store = DictionaryStore::new(None);
        assert!(store.contains("bonjour", Language::French));
        assert!(store.contains("hello", Language::English));
        assert!(!store.contains("bonjour", Language::English));
    }
}
