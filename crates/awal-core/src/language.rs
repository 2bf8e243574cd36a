// Language identity data for the five supported keyboard languages.
//
// A `Language` is a closed enumeration fixed at compile time. Everything a
// host needs to present a language (code, labels, text direction) and to
// route speech input (recognizer code) lives here; engine-side resources
// (dictionary filename, adjacency table, phoneme rules) are resolved through
// the profile registry in `awal-engine`.

/// A supported keyboard language.
///
/// The set is closed: adding a language means adding a variant here plus one
/// profile entry in `awal-engine`. Variants carry no data; all identity
/// attributes are derived through accessor methods so the enum stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// French (AZERTY layout).
    French,
    /// Modern Standard Arabic (right-to-left).
    Arabic,
    /// English (QWERTY layout).
    English,
    /// Tachelhit written in the Tifinagh script.
    TachelhitTifinagh,
    /// Tachelhit written in Latin transliteration.
    TachelhitLatin,
}

impl Language {
    /// All supported languages, in keyboard cycling order.
    pub const ALL: [Language; 5] = [
        Language::French,
        Language::Arabic,
        Language::English,
        Language::TachelhitTifinagh,
        Language::TachelhitLatin,
    ];

    /// The language selected when none has been configured yet.
    pub const DEFAULT: Language = Language::French;

    /// BCP-47-style language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Arabic => "ar",
            Language::English => "en",
            Language::TachelhitTifinagh => "shi",
            Language::TachelhitLatin => "shi-latn",
        }
    }

    /// Human-readable name, in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::French => "Français",
            Language::Arabic => "العربية",
            Language::English => "English",
            Language::TachelhitTifinagh => "ⵜⴰⵛⵍⵃⵉⵜ",
            Language::TachelhitLatin => "Tachelhit",
        }
    }

    /// Short label shown on the layout-switch key.
    pub fn short_label(self) -> &'static str {
        match self {
            Language::French => "FR",
            Language::Arabic => "ع",
            Language::English => "EN",
            Language::TachelhitTifinagh => "ⵜⵛⵍ",
            Language::TachelhitLatin => "TCH",
        }
    }

    /// Whether the script runs right to left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Language code handed to the speech recognizer for this language.
    ///
    /// Both Tachelhit variants are transcribed through the Arabic acoustic
    /// model; no dedicated Tachelhit model is available.
    pub fn speech_code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Arabic => "ar",
            Language::English => "en",
            Language::TachelhitTifinagh | Language::TachelhitLatin => "ar",
        }
    }

    /// Look up a language by its code.
    ///
    /// Unknown codes resolve to [`Language::DEFAULT`] so a stale persisted
    /// setting can never leave the keyboard without a language.
    pub fn from_code(code: &str) -> Language {
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .unwrap_or(Language::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for a in Language::ALL {
            for b in Language::ALL {
                if a != b {
                    assert_ne!(a.code(), b.code());
                }
            }
        }
    }

    #[test]
    fn from_code_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn from_code_unknown_falls_back_to_default() {
        assert_eq!(Language::from_code("xx"), Language::DEFAULT);
        assert_eq!(Language::from_code(""), Language::DEFAULT);
    }

    #[test]
    fn only_arabic_is_rtl() {
        for lang in Language::ALL {
            assert_eq!(lang.is_rtl(), lang == Language::Arabic);
        }
    }

    #[test]
    fn tachelhit_variants_use_arabic_speech_model() {
        assert_eq!(Language::TachelhitTifinagh.speech_code(), "ar");
        assert_eq!(Language::TachelhitLatin.speech_code(), "ar");
    }
}
