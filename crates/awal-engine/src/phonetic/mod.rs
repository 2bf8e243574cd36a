// Phoneme folding and phonetic similarity.
//
// `fold` reduces a written word to a canonical phoneme string through the
// language's rule tables; two words that sound alike fold to the same (or
// nearly the same) string even when spelled differently. `similarity`
// compares folded strings with plain Levenshtein distance — transpositions
// get no discount here because phoneme order is what distinguishes words.

pub mod rules;

use awal_core::Language;

use crate::fuzzy::edit;
use crate::profile::profile;
use rules::PhonemeRules;

/// Fold `text` to its canonical phoneme string for `language`.
///
/// Stages run in a fixed order; each language enables the stages its rule
/// table declares: lowercase, single-character folds, glyph mapping,
/// ordered whole-string rewrites, tashkeel stripping, silent-ending trim,
/// doubled-letter collapse, uppercase.
pub fn fold(text: &str, language: Language) -> String {
    apply(text, profile(language).phonemes)
}

fn apply(text: &str, rules: &PhonemeRules) -> String {
    let mut s = if rules.lowercase_input {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if !rules.char_folds.is_empty() {
        s = s
            .chars()
            .map(|c| {
                rules
                    .char_folds
                    .iter()
                    .find(|(from, _)| *from == c)
                    .map_or(c, |(_, to)| *to)
            })
            .collect();
    }

    if !rules.glyph_map.is_empty() {
        let mut mapped = String::with_capacity(s.len());
        for c in s.chars() {
            match rules.glyph_map.iter().find(|(glyph, _)| *glyph == c) {
                Some((_, symbol)) => mapped.push_str(symbol),
                None => mapped.push(c),
            }
        }
        s = mapped;
    }

    // Sequential global substitutions: later rules see earlier output.
    for (pattern, replacement) in rules.rewrites {
        s = s.replace(pattern, replacement);
    }

    if rules.strip_tashkeel {
        s.retain(|c| !rules::is_tashkeel(c));
    }

    if !rules.silent_endings.is_empty()
        && s.chars().last().is_some_and(|c| rules.silent_endings.contains(&c))
    {
        s.pop();
    }

    if rules.collapse_doubles {
        s = collapse_doubled(&s);
    }

    if rules.uppercase_result {
        s = s.to_uppercase();
    }
    s
}

/// Collapse doubled letters pairwise, left to right and non-overlapping:
/// "ll" becomes "l", "aaa" becomes "aa".
fn collapse_doubled(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if i + 1 < chars.len() && chars[i] == chars[i + 1] {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// Phonetic similarity of two raw strings in `language`.
///
/// Both strings are folded first; if either folds to nothing the score is
/// 0, otherwise `1 - levenshtein / max(len)` over the phoneme strings.
pub fn similarity(input: &str, candidate: &str, language: Language) -> f32 {
    let a: Vec<char> = fold(input, language).chars().collect();
    let b: Vec<char> = fold(candidate, language).chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let distance = edit::levenshtein(&a, &b);
    let max_len = a.len().max(b.len());
    1.0 - distance as f32 / max_len as f32
}
