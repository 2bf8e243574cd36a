// awal-engine: candidate scoring and ranking for the Awal keyboard.
//
// Given a typed (or voice-transcribed) word and a language, the engine
// scans the language's frequency-ranked dictionary and fuses three
// similarity models per candidate:
//
//   - `fuzzy::edit`: normalized Damerau-Levenshtein similarity
//   - `fuzzy::keyboard`: adjacency-aware proximity over the physical layout
//   - `phonetic`: edit distance over per-language canonical phoneme strings
//
// The fused score drives two decisions with distinct confidence bars:
// candidates above the suggestion threshold are shown to the user, and a
// single candidate above the stricter auto-correct threshold may silently
// replace the typed word.
//
// Architecture:
//   - `profile`: per-language registry of resources (dictionary filename,
//     keyboard layout, phoneme ruleset, fallback word list)
//   - `dictionary`: word-list loading, caching, and membership
//   - `fuzzy`: raw-string similarity models
//   - `phonetic`: phoneme folding and phonetic similarity
//   - `engine`: the `CorrectionEngine` façade that fuses and ranks

pub mod dictionary;
pub mod engine;
pub mod fuzzy;
pub mod phonetic;
pub mod profile;

pub use engine::{AUTOCORRECT_THRESHOLD, CorrectionEngine, SUGGESTION_THRESHOLD};
pub use fuzzy::keyboard::KeyboardLayout;
