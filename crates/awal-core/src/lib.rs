// awal-core: shared vocabulary types for the Awal typing-correction engine.
//
// This crate holds the types every other workspace member speaks in:
// the closed `Language` enumeration with its per-language identity data,
// and the `ScoredSuggestion` pair returned by the ranking pipeline.
// It performs no I/O and holds no mutable state.

pub mod language;
pub mod suggestion;

pub use language::Language;
pub use suggestion::ScoredSuggestion;
