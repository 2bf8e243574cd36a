// WASM bindings for the Awal typing-correction engine.
//
// Provides a `WasmCorrector` class exported via wasm-bindgen that wraps
// the `CorrectionEngine`. Scored suggestions are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// The wasm host has no filesystem, so the corrector starts on the built-in
// fallback vocabularies; the host fetches dictionary text itself and feeds
// it in through `loadDictionary`.
//
// Usage from JavaScript:
//
//   const corrector = new WasmCorrector();
//   corrector.loadDictionary("fr", frenchWordsText);
//   corrector.setLanguage("fr");
//   corrector.suggestions("bonjou", 5);   // => [{ word: "bonjour", score: 1 }, ...]
//   corrector.topCorrection("bonjou");    // => "bonjour" or undefined
//   corrector.isKnown("bonjour");         // => true
//   corrector.phonemes("été");            // => "ET"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use awal_core::Language;
use awal_engine::{CorrectionEngine, phonetic};

/// Serializable representation of a scored suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    word: String,
    score: f32,
}

/// Typing-correction engine for WebAssembly hosts.
#[wasm_bindgen]
pub struct WasmCorrector {
    engine: CorrectionEngine,
}

#[wasm_bindgen]
impl WasmCorrector {
    /// Create a corrector backed by the built-in fallback vocabularies.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCorrector {
        WasmCorrector {
            engine: CorrectionEngine::with_builtin_dictionaries(),
        }
    }

    /// Install dictionary text for a language code (one word per line,
    /// frequency-ordered, `#` comments allowed).
    #[wasm_bindgen(js_name = loadDictionary)]
    pub fn load_dictionary(&self, code: &str, text: &str) {
        self.engine
            .install_dictionary(Language::from_code(code), text);
    }

    /// Switch the active language. Unknown codes fall back to French.
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&mut self, code: &str) {
        self.engine.set_language(Language::from_code(code));
    }

    /// Code of the currently active language.
    #[wasm_bindgen(js_name = activeLanguage)]
    pub fn active_language(&self) -> String {
        self.engine.active_language().code().to_string()
    }

    /// Ranked suggestions for the active language as `{word, score}` pairs.
    pub fn suggestions(&self, input: &str, max_results: usize) -> Result<JsValue, JsError> {
        let language = self.engine.active_language();
        let scored: Vec<JsSuggestion> = self
            .engine
            .scored_suggestions(input, language, max_results)
            .into_iter()
            .map(|s| JsSuggestion {
                word: s.word,
                score: s.score,
            })
            .collect();
        serde_wasm_bindgen::to_value(&scored).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The silent auto-correct replacement, if one clears the bar.
    #[wasm_bindgen(js_name = topCorrection)]
    pub fn top_correction(&self, input: &str) -> Option<String> {
        self.engine
            .top_correction(input, self.engine.active_language())
    }

    /// Whether the word is in the active language's dictionary.
    #[wasm_bindgen(js_name = isKnown)]
    pub fn is_known(&self, word: &str) -> bool {
        self.engine.is_known(word, self.engine.active_language())
    }

    /// Canonical phoneme folding of a word in the active language.
    pub fn phonemes(&self, word: &str) -> String {
        phonetic::fold(word, self.engine.active_language())
    }

    /// Crate version (from Cargo.toml).
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for WasmCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrector_starts_on_french_builtin() {
        let corrector = WasmCorrector::new();
        assert_eq!(corrector.active_language(), "fr");
        assert!(corrector.is_known("bonjour"));
    }

    #[test]
    fn load_dictionary_and_switch_language() {
        let mut corrector = WasmCorrector::new();
        corrector.load_dictionary("en", "hello\nworld\n");
        corrector.set_language("en");
        assert!(corrector.is_known("hello"));
        assert!(!corrector.is_known("bonjour"));
        // "hell" is a prefix of "hello", which scores 1.0 and clears the
        // auto-correct bar outright.
        assert_eq!(
            corrector.top_correction("hell"),
            Some("hello".to_string())
        );
    }

    #[test]
    fn phonemes_follow_the_active_language() {
        let mut corrector = WasmCorrector::new();
        corrector.set_language("shi");
        assert_eq!(corrector.phonemes("ⴰⵣⵓⵍ"), "AZUL");
    }
}
