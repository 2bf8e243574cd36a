// Raw-string similarity models.
//
//   - `edit`: Damerau-Levenshtein distance and its normalized similarity
//   - `keyboard`: position-by-position scoring against physical key adjacency

pub mod edit;
pub mod keyboard;

pub use edit::normalized_similarity;
pub use keyboard::{KeyboardLayout, proximity_score};
