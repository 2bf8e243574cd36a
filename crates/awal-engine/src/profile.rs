// Per-language resource registry.
//
// Every language-dependent resource the engine consumes is resolved through
// one table: dictionary filename, keyboard adjacency layout, phoneme rule
// set, and the built-in fallback word list. Adding a language means adding
// one `Language` variant in awal-core and one profile here — no scoring
// code changes.

use awal_core::Language;

use crate::dictionary::builtin;
use crate::fuzzy::keyboard::KeyboardLayout;
use crate::phonetic::rules::{self, PhonemeRules};

/// Static resources for one language.
pub struct LanguageProfile {
    /// File name looked up under the dictionary directory.
    pub dictionary_filename: &'static str,
    /// Physical layout whose adjacency table models fat-finger slips.
    ///
    /// Only French uses AZERTY. Arabic and Tifinagh have no dedicated
    /// physical adjacency model and fall back to QWERTY; letters outside
    /// the Latin block simply never get the adjacency bonus.
    pub layout: KeyboardLayout,
    /// Phoneme folding rules.
    pub phonemes: &'static PhonemeRules,
    /// Built-in word list installed when the dictionary file is missing.
    pub fallback_words: &'static [&'static str],
}

const FRENCH: LanguageProfile = LanguageProfile {
    dictionary_filename: "fr_words.txt",
    layout: KeyboardLayout::Azerty,
    phonemes: &rules::FRENCH,
    fallback_words: builtin::FRENCH,
};

const ARABIC: LanguageProfile = LanguageProfile {
    dictionary_filename: "ar_words.txt",
    layout: KeyboardLayout::Qwerty,
    phonemes: &rules::ARABIC,
    fallback_words: builtin::ARABIC,
};

const ENGLISH: LanguageProfile = LanguageProfile {
    dictionary_filename: "en_words.txt",
    layout: KeyboardLayout::Qwerty,
    phonemes: &rules::ENGLISH,
    fallback_words: builtin::ENGLISH,
};

const TACHELHIT_TIFINAGH: LanguageProfile = LanguageProfile {
    dictionary_filename: "shi_tifinagh_words.txt",
    layout: KeyboardLayout::Qwerty,
    phonemes: &rules::TACHELHIT_TIFINAGH,
    fallback_words: builtin::TACHELHIT_TIFINAGH,
};

const TACHELHIT_LATIN: LanguageProfile = LanguageProfile {
    dictionary_filename: "shi_latin_words.txt",
    layout: KeyboardLayout::Qwerty,
    phonemes: &rules::TACHELHIT_LATIN,
    fallback_words: builtin::TACHELHIT_LATIN,
};

/// Resolve the profile for a language.
pub const fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::French => &FRENCH,
        Language::Arabic => &ARABIC,
        Language::English => &ENGLISH,
        Language::TachelhitTifinagh => &TACHELHIT_TIFINAGH,
        Language::TachelhitLatin => &TACHELHIT_LATIN,
    }
}
