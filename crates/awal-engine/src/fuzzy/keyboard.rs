// Keyboard-adjacency-aware typo scoring.
//
// A mistyped letter that sits one physical key away from the intended one
// is far more likely to be a fat-finger slip than a real spelling mistake,
// so equal-length comparisons are scored position by position against the
// layout's adjacency table. Length-mismatched pairs cannot be compared
// positionally and fall back to half the plain edit similarity.

use super::edit;

/// Physical key arrangement used for adjacency scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardLayout {
    /// Standard QWERTY arrangement.
    Qwerty,
    /// French AZERTY arrangement.
    Azerty,
}

// =========================================================================
// Adjacency tables
// =========================================================================
//
// Each entry maps a lowercase letter to the letters reachable by one key
// step on the physical layout. Only the alphabetic block is modeled; the
// number row and punctuation keys are not reachable by a one-step slip on
// the phone keyboards these tables describe.

/// AZERTY adjacency (French).
const AZERTY_ADJACENCY: &[(char, &[char])] = &[
    ('a', &['z', 'q']),
    ('z', &['a', 'e', 'q', 's']),
    ('e', &['z', 'r', 's', 'd']),
    ('r', &['e', 't', 'd', 'f']),
    ('t', &['r', 'y', 'f', 'g']),
    ('y', &['t', 'u', 'g', 'h']),
    ('u', &['y', 'i', 'h', 'j']),
    ('i', &['u', 'o', 'j', 'k']),
    ('o', &['i', 'p', 'k', 'l']),
    ('p', &['o', 'l', 'm']),
    ('q', &['a', 'z', 's', 'w']),
    ('s', &['q', 'z', 'e', 'd', 'w', 'x']),
    ('d', &['s', 'e', 'r', 'f', 'x', 'c']),
    ('f', &['d', 'r', 't', 'g', 'c', 'v']),
    ('g', &['f', 't', 'y', 'h', 'v', 'b']),
    ('h', &['g', 'y', 'u', 'j', 'b', 'n']),
    ('j', &['h', 'u', 'i', 'k', 'n']),
    ('k', &['j', 'i', 'o', 'l']),
    ('l', &['k', 'o', 'p', 'm']),
    ('m', &['l', 'p']),
    ('w', &['q', 's', 'x']),
    ('x', &['w', 's', 'd', 'c']),
    ('c', &['x', 'd', 'f', 'v']),
    ('v', &['c', 'f', 'g', 'b']),
    ('b', &['v', 'g', 'h', 'n']),
    ('n', &['b', 'h', 'j']),
];

/// QWERTY adjacency (all non-French languages).
const QWERTY_ADJACENCY: &[(char, &[char])] = &[
    ('q', &['w', 'a']),
    ('w', &['q', 'e', 'a', 's']),
    ('e', &['w', 'r', 's', 'd']),
    ('r', &['e', 't', 'd', 'f']),
    ('t', &['r', 'y', 'f', 'g']),
    ('y', &['t', 'u', 'g', 'h']),
    ('u', &['y', 'i', 'h', 'j']),
    ('i', &['u', 'o', 'j', 'k']),
    ('o', &['i', 'p', 'k', 'l']),
    ('p', &['o', 'l']),
    ('a', &['q', 'w', 's', 'z']),
    ('s', &['a', 'w', 'e', 'd', 'z', 'x']),
    ('d', &['s', 'e', 'r', 'f', 'x', 'c']),
    ('f', &['d', 'r', 't', 'g', 'c', 'v']),
    ('g', &['f', 't', 'y', 'h', 'v', 'b']),
    ('h', &['g', 'y', 'u', 'j', 'b', 'n']),
    ('j', &['h', 'u', 'i', 'k', 'n', 'm']),
    ('k', &['j', 'i', 'o', 'l', 'm']),
    ('l', &['k', 'o', 'p']),
    ('z', &['a', 's', 'x']),
    ('x', &['z', 's', 'd', 'c']),
    ('c', &['x', 'd', 'f', 'v']),
    ('v', &['c', 'f', 'g', 'b']),
    ('b', &['v', 'g', 'h', 'n']),
    ('n', &['b', 'h', 'j', 'm']),
    ('m', &['n', 'j', 'k']),
];

/// Letters one key step away from `c` on the given layout.
///
/// Characters outside the modeled alphabetic block (digits, Arabic or
/// Tifinagh letters) have no neighbors.
pub fn neighbors(layout: KeyboardLayout, c: char) -> &'static [char] {
    let table = match layout {
        KeyboardLayout::Qwerty => QWERTY_ADJACENCY,
        KeyboardLayout::Azerty => AZERTY_ADJACENCY,
    };
    table
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, adjacent)| *adjacent)
        .unwrap_or(&[])
}

/// Score `input` against `candidate` using key proximity.
///
/// Equal-length strings are compared position by position: exact matches
/// count toward both the exact and proximity tallies, mismatches on
/// adjacent keys toward the proximity tally only, and the score is
/// `exact + 0.5 * (proximity - exact)` with both tallies taken as
/// fractions of the length. Since `exact <= proximity <= 1`, the result
/// never exceeds 1.
///
/// Length-mismatched strings fall back to half the normalized edit
/// similarity; proximity only means something position by position.
pub fn proximity_score(input: &str, candidate: &str, layout: KeyboardLayout) -> f32 {
    let input_chars: Vec<char> = input.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();

    if input_chars.len() != candidate_chars.len() {
        return 0.5 * edit::normalized_similarity(input, candidate);
    }
    if input_chars.is_empty() {
        return 1.0;
    }

    let mut exact = 0usize;
    let mut proximate = 0usize;
    for (&ic, &cc) in input_chars.iter().zip(&candidate_chars) {
        if ic == cc {
            exact += 1;
            proximate += 1;
        } else if neighbors(layout, ic).contains(&cc) {
            proximate += 1;
        }
    }

    let len = input_chars.len() as f32;
    let exact_fraction = exact as f32 / len;
    let proximity_bonus = (proximate - exact) as f32 / len * 0.5;
    exact_fraction + proximity_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_differ_between_layouts() {
        // 'a' and 'q' swap places between QWERTY and AZERTY.
        assert!(neighbors(KeyboardLayout::Qwerty, 'a').contains(&'q'));
        assert!(neighbors(KeyboardLayout::Azerty, 'a').contains(&'q'));
        assert!(neighbors(KeyboardLayout::Qwerty, 'a').contains(&'z'));
        assert!(neighbors(KeyboardLayout::Azerty, 'z').contains(&'a'));
        assert!(!neighbors(KeyboardLayout::Qwerty, 'p').contains(&'m'));
        assert!(neighbors(KeyboardLayout::Azerty, 'p').contains(&'m'));
    }

    #[test]
    fn unmodeled_characters_have_no_neighbors() {
        assert!(neighbors(KeyboardLayout::Qwerty, '3').is_empty());
        assert!(neighbors(KeyboardLayout::Qwerty, 'ب').is_empty());
        assert!(neighbors(KeyboardLayout::Azerty, 'ⴰ').is_empty());
    }

    #[test]
    fn identical_words_score_one() {
        assert_eq!(
            proximity_score("hello", "hello", KeyboardLayout::Qwerty),
            1.0
        );
    }

    #[test]
    fn adjacent_key_mismatch_beats_distant_mismatch() {
        // 'k' is adjacent to 'l' on QWERTY, 'q' is not.
        let near = proximity_score("helko", "hello", KeyboardLayout::Qwerty);
        let far = proximity_score("helqo", "hello", KeyboardLayout::Qwerty);
        assert!(near > far);
        // 4/5 exact either way; the adjacency bonus adds 0.5 * 1/5.
        assert!((near - (0.8 + 0.1)).abs() < 1e-6);
        assert!((far - 0.8).abs() < 1e-6);
    }

    #[test]
    fn adjacency_bonus_exceeds_plain_similarity_for_slips() {
        // "helko" vs "hello" has 4 exact positions and one adjacent-key
        // slip; proximity must beat the score the same word would get if
        // the mismatch were on a distant key.
        let with_bonus = proximity_score("helko", "hello", KeyboardLayout::Qwerty);
        let without_bonus = proximity_score("helqo", "hello", KeyboardLayout::Qwerty);
        assert!(with_bonus > without_bonus);
    }

    #[test]
    fn length_mismatch_halves_edit_similarity() {
        let expected = 0.5 * edit::normalized_similarity("bonjou", "bonjour");
        let got = proximity_score("bonjou", "bonjour", KeyboardLayout::Azerty);
        assert!((got - expected).abs() < 1e-6);
    }

    #[test]
    fn score_never_exceeds_one() {
        // The formula has no explicit clamp; exact <= proximate bounds it.
        for (a, b) in [
            ("hello", "hello"),
            ("helko", "hello"),
            ("qwert", "werty"),
            ("aaaaa", "zzzzz"),
        ] {
            let s = proximity_score(a, b, KeyboardLayout::Qwerty);
            assert!(s <= 1.0, "proximity_score({a:?}, {b:?}) = {s}");
        }
    }

    #[test]
    fn all_distant_mismatches_score_zero() {
        assert_eq!(proximity_score("ppppp", "xxxxx", KeyboardLayout::Qwerty), 0.0);
    }
}
