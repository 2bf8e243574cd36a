// The (word, score) pair produced by the ranking pipeline.

/// A candidate word together with its fused confidence score.
///
/// Scores are produced by the weighted fusion in `awal-engine` and sit in
/// [0, 1]; 1.0 marks a prefix completion of the typed input.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSuggestion {
    /// The suggested dictionary word (lowercase).
    pub word: String,
    /// Fused confidence score, higher is better.
    pub score: f32,
}

impl ScoredSuggestion {
    /// Create a new scored suggestion.
    pub fn new(word: impl Into<String>, score: f32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_word_and_score() {
        let s = ScoredSuggestion::new("bonjour", 0.9);
        assert_eq!(s.word, "bonjour");
        assert_eq!(s.score, 0.9);
    }
}
