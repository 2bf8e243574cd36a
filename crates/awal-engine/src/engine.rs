// Score fusion, ranking, and the suggestion/auto-correct policy.
//
// The engine owns the dictionary cache and the active language; every
// scoring operation is a pure function of (input, candidate, language)
// plus the static rule tables. Two confidence bars apply: candidates above
// the suggestion threshold may be shown, and only a candidate above the
// stricter auto-correct threshold may silently replace typed text.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::path::PathBuf;

use awal_core::{Language, ScoredSuggestion};

use crate::dictionary::DictionaryStore;
use crate::fuzzy;
use crate::phonetic;
use crate::profile::profile;

/// Minimum fused score for a candidate to appear in the suggestion list.
pub const SUGGESTION_THRESHOLD: f32 = 0.4;

/// Minimum fused score for a candidate to be applied silently. Kept well
/// above the suggestion threshold: showing a weak guess is acceptable,
/// replacing the user's text on one is not.
pub const AUTOCORRECT_THRESHOLD: f32 = 0.85;

// Fusion weights, summing to 1. Phonetic similarity dominates: the primary
// correction need is speech-origin and accent-driven confusion, not just
// fat-finger typos.
const EDIT_WEIGHT: f32 = 0.3;
const PHONETIC_WEIGHT: f32 = 0.5;
const PROXIMITY_WEIGHT: f32 = 0.2;

/// Inputs shorter than this yield no suggestions.
const MIN_INPUT_CHARS: usize = 2;

/// The typing-correction engine.
///
/// Single-owner by design: the dictionary cache sits behind a `RefCell` so
/// scoring calls can lazily load under `&self`, which makes the engine
/// deliberately not `Sync`. Hosts confine it to one thread or actor; the
/// first load for a language blocks on file I/O, so latency-sensitive
/// callers pre-warm via [`CorrectionEngine::set_language`].
pub struct CorrectionEngine {
    store: RefCell<DictionaryStore>,
    active: Language,
}

impl CorrectionEngine {
    /// Create an engine reading dictionaries from `dict_dir`.
    pub fn new(dict_dir: Option<PathBuf>) -> Self {
        Self {
            store: RefCell::new(DictionaryStore::new(dict_dir)),
            active: Language::DEFAULT,
        }
    }

    /// Create an engine that uses only the built-in fallback vocabularies.
    pub fn with_builtin_dictionaries() -> Self {
        Self::new(None)
    }

    /// Switch the active language and eagerly load its dictionary, so the
    /// blocking read happens here rather than on the first suggestion
    /// request.
    pub fn set_language(&mut self, language: Language) {
        self.active = language;
        self.store.borrow_mut().load(language);
    }

    /// The currently active language.
    pub fn active_language(&self) -> Language {
        self.active
    }

    /// Whether `word` is in the language's dictionary (case-insensitive).
    pub fn is_known(&self, word: &str, language: Language) -> bool {
        self.store.borrow_mut().contains(word, language)
    }

    /// Install host-supplied dictionary text for a language, replacing any
    /// cached dictionary. For hosts without filesystem access.
    pub fn install_dictionary(&self, language: Language, text: &str) {
        self.store.borrow_mut().install_words(language, text);
    }

    /// Ranked correction candidates with their fused scores.
    ///
    /// Inputs shorter than two characters yield nothing. Every dictionary
    /// word is scored (a full linear scan — the dominant cost, bounded by
    /// the 50,000-word dictionary cap); candidates must beat the
    /// suggestion threshold strictly. The sort is stable and descending,
    /// so equal scores keep dictionary order, which is frequency rank.
    pub fn scored_suggestions(
        &self,
        input: &str,
        language: Language,
        max_results: usize,
    ) -> Vec<ScoredSuggestion> {
        if input.chars().count() < MIN_INPUT_CHARS {
            return Vec::new();
        }

        let mut store = self.store.borrow_mut();
        let mut candidates: Vec<ScoredSuggestion> = Vec::new();
        for word in store.words(language) {
            let score = self.score(input, word, language);
            if score > SUGGESTION_THRESHOLD {
                candidates.push(ScoredSuggestion::new(word.clone(), score));
            }
        }

        candidates.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
        });
        candidates.truncate(max_results);
        candidates
    }

    /// Ranked correction candidates, words only.
    pub fn suggestions(
        &self,
        input: &str,
        language: Language,
        max_results: usize,
    ) -> Vec<String> {
        self.scored_suggestions(input, language, max_results)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// The single correction confident enough to apply silently, if any.
    ///
    /// Takes the best suggestion and re-scores it against the input; only a
    /// score strictly above the auto-correct threshold qualifies.
    pub fn top_correction(&self, input: &str, language: Language) -> Option<String> {
        let top = self.suggestions(input, language, 1).into_iter().next()?;
        let score = self.score(input, &top, language);
        (score > AUTOCORRECT_THRESHOLD).then_some(top)
    }

    /// Fused confidence score for one candidate.
    ///
    /// A candidate that completes the typed input (case-insensitive prefix
    /// match) scores 1.0 outright and bypasses the similarity models.
    /// Otherwise the three component scores are fused with fixed weights.
    pub fn score(&self, input: &str, candidate: &str, language: Language) -> f32 {
        let input_lower = input.to_lowercase();
        let candidate_lower = candidate.to_lowercase();

        if candidate_lower.starts_with(&input_lower) {
            return 1.0;
        }

        let edit = fuzzy::edit::normalized_similarity(&input_lower, &candidate_lower);
        let phonetic = phonetic::similarity(&input_lower, &candidate_lower, language);
        let proximity = fuzzy::keyboard::proximity_score(
            &input_lower,
            &candidate_lower,
            profile(language).layout,
        );

        EDIT_WEIGHT * edit + PHONETIC_WEIGHT * phonetic + PROXIMITY_WEIGHT * proximity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(language: Language, words: &str) -> CorrectionEngine {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        engine.install_dictionary(language, words);
        engine
    }

    #[test]
    fn prefix_completion_scores_one() {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        assert_eq!(engine.score("bonjou", "bonjour", Language::French), 1.0);
        assert_eq!(engine.score("BONJOU", "bonjour", Language::French), 1.0);
        assert_eq!(engine.score("bo", "bonjour", Language::French), 1.0);
    }

    #[test]
    fn fused_score_uses_fixed_weights() {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        let input = "salop";
        let candidate = "salut";
        let expected = 0.3 * fuzzy::edit::normalized_similarity(input, candidate)
            + 0.5 * phonetic::similarity(input, candidate, Language::French)
            + 0.2 * fuzzy::keyboard::proximity_score(
                input,
                candidate,
                fuzzy::keyboard::KeyboardLayout::Azerty,
            );
        let got = engine.score(input, candidate, Language::French);
        assert!((got - expected).abs() < 1e-6);
    }

    #[test]
    fn short_input_yields_no_suggestions() {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        assert!(engine.suggestions("a", Language::French, 5).is_empty());
        assert!(engine.suggestions("", Language::French, 5).is_empty());
    }

    #[test]
    fn suggestions_respect_max_results_and_threshold() {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        let scored = engine.scored_suggestions("bonjou", Language::French, 3);
        assert!(scored.len() <= 3);
        for s in &scored {
            assert!(s.score > SUGGESTION_THRESHOLD);
        }
    }

    #[test]
    fn prefix_match_ranks_first_and_autocorrects() {
        let engine = engine_with(Language::French, "bonjour\nbonsoir\n");
        let scored = engine.scored_suggestions("bonjou", Language::French, 5);
        assert_eq!(scored[0].word, "bonjour");
        assert_eq!(scored[0].score, 1.0);
        assert_eq!(
            engine.top_correction("bonjou", Language::French),
            Some("bonjour".to_string())
        );
    }

    #[test]
    fn weak_best_candidate_is_not_autocorrected() {
        // "xyzzy" bears no resemblance to anything in the dictionary.
        let engine = engine_with(Language::English, "hello\nworld\n");
        assert_eq!(engine.top_correction("xyzzy", Language::English), None);
    }

    #[test]
    fn suggestions_without_autocorrect_when_confidence_is_middling() {
        // A candidate can clear the suggestion bar yet miss the
        // auto-correct bar; the engine must then suggest but not replace.
        let engine = engine_with(Language::English, "though\n");
        let suggestions = engine.suggestions("thow", Language::English, 5);
        let top = engine.top_correction("thow", Language::English);
        if let Some(word) = &top {
            let score = engine.score("thow", word, Language::English);
            assert!(score > AUTOCORRECT_THRESHOLD);
        } else {
            // No silent replacement; the candidate may still be suggested.
            for word in &suggestions {
                let score = engine.score("thow", word, Language::English);
                assert!(score <= AUTOCORRECT_THRESHOLD);
            }
        }
    }

    #[test]
    fn equal_scores_keep_dictionary_order() {
        // Two words equally similar to the input: the earlier (more
        // frequent) dictionary entry must come first.
        let engine = engine_with(Language::English, "cat\ncot\n");
        let scored = engine.scored_suggestions("ct", Language::English, 5);
        let cat = scored.iter().position(|s| s.word == "cat");
        let cot = scored.iter().position(|s| s.word == "cot");
        if let (Some(cat), Some(cot)) = (cat, cot) {
            if (scored[cat].score - scored[cot].score).abs() < f32::EPSILON {
                assert!(cat < cot);
            }
        }
    }

    #[test]
    fn set_language_prewarms_the_dictionary() {
        let mut engine = CorrectionEngine::with_builtin_dictionaries();
        engine.set_language(Language::TachelhitLatin);
        assert_eq!(engine.active_language(), Language::TachelhitLatin);
        assert!(engine.is_known("azul", Language::TachelhitLatin));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let engine = CorrectionEngine::with_builtin_dictionaries();
        for candidate in ["bonjour", "salut", "merci", "été"] {
            let s = engine.score("bonjuor", candidate, Language::French);
            assert!((0.0..=1.0).contains(&s), "score for {candidate} = {s}");
        }
    }
}
