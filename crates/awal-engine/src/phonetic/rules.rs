// Per-language phoneme rule tables.
//
// A folding is described as data: the stages a language uses and the ordered
// tables each stage consumes. Rewrite tables are applied as sequential
// whole-string substitutions, so later rules operate on the output of
// earlier ones; table order is load-bearing and must not be rearranged.
// Several rules deliberately shadow later ones (for French, "ment" fires
// before "ement" ever matches, and "eau" wins over "au").

/// Data-driven description of one language's phoneme folding.
///
/// Stages run in the fixed order implemented by [`super::fold`]; a language
/// opts out of a stage with an empty table or a `false` flag.
pub struct PhonemeRules {
    /// Lowercase the input before any table is applied.
    pub lowercase_input: bool,
    /// Ordered single-character folds (letter variants that sound alike).
    pub char_folds: &'static [(char, char)],
    /// Glyph-to-symbol table applied per character; unmapped glyphs pass
    /// through unchanged.
    pub glyph_map: &'static [(char, &'static str)],
    /// Ordered whole-string rewrite rules.
    pub rewrites: &'static [(&'static str, &'static str)],
    /// Drop Arabic vocalization marks (tashkeel) after rewriting.
    pub strip_tashkeel: bool,
    /// Trailing characters trimmed once after rewriting (silent endings).
    pub silent_endings: &'static [char],
    /// Collapse doubled letters pairwise after rewriting.
    pub collapse_doubles: bool,
    /// Uppercase the result into the canonical phoneme alphabet.
    pub uppercase_result: bool,
}

// =========================================================================
// French
// =========================================================================
//
// Groups sounds that are commonly confused, especially by non-native
// speakers and in fast speech: nasal vowels, vowel groups that collapse to
// one sound, consonant digraphs, and accent variants. Silent final
// consonants are trimmed at the end.

pub const FRENCH: PhonemeRules = PhonemeRules {
    lowercase_input: true,
    char_folds: &[],
    glyph_map: &[],
    rewrites: &[
        // Nasal vowels (longest patterns first within each sound group)
        ("tion", "SJÕ"),
        ("sion", "SJÕ"),
        ("ment", "MÃ"),
        ("ement", "MÃ"),
        ("aient", "E"),
        ("ais", "E"),
        ("ait", "E"),
        ("ain", "Ẽ"),
        ("aim", "Ẽ"),
        ("ein", "Ẽ"),
        ("eim", "Ẽ"),
        ("in", "Ẽ"),
        ("im", "Ẽ"),
        ("un", "Ẽ"),
        ("ym", "Ẽ"),
        ("yn", "Ẽ"),
        ("an", "Ã"),
        ("am", "Ã"),
        ("en", "Ã"),
        ("em", "Ã"),
        ("on", "Õ"),
        ("om", "Õ"),
        // Vowel groups
        ("eau", "O"),
        ("aux", "O"),
        ("au", "O"),
        ("ou", "U"),
        ("oi", "WA"),
        ("ai", "E"),
        ("ei", "E"),
        ("eu", "Ø"),
        ("œu", "Ø"),
        // Consonant groups
        ("ph", "F"),
        ("qu", "K"),
        ("ch", "SH"),
        ("gn", "NY"),
        ("gu", "G"),
        ("ge", "JE"),
        ("gi", "JI"),
        ("ll", "L"),
        ("ss", "S"),
        ("cc", "KS"),
        ("th", "T"),
        ("rr", "R"),
        ("tt", "T"),
        ("mm", "M"),
        ("nn", "N"),
        ("pp", "P"),
        // Accented letters to lowercase base letters. Kept lowercase so the
        // silent-ending trim below treats "été" and "ete" identically; the
        // final uppercasing canonicalizes them anyway.
        ("é", "e"),
        ("è", "e"),
        ("ê", "e"),
        ("ë", "e"),
        ("à", "a"),
        ("â", "a"),
        ("ä", "a"),
        ("î", "i"),
        ("ï", "i"),
        ("ô", "o"),
        ("ö", "o"),
        ("ù", "u"),
        ("û", "u"),
        ("ü", "u"),
        ("ÿ", "i"),
        ("ç", "s"),
        ("œ", "ø"),
        ("æ", "e"),
    ],
    strip_tashkeel: false,
    silent_endings: &['s', 'x', 'z', 't', 'd', 'p', 'e'],
    collapse_doubles: false,
    uppercase_result: true,
};

// =========================================================================
// English
// =========================================================================

pub const ENGLISH: PhonemeRules = PhonemeRules {
    lowercase_input: true,
    char_folds: &[],
    glyph_map: &[],
    rewrites: &[
        ("ough", "O"),
        ("tion", "SHUN"),
        ("sion", "ZHUN"),
        ("th", "TH"),
        ("ph", "F"),
        ("ch", "CH"),
        ("sh", "SH"),
        ("ck", "K"),
        ("gh", ""),
        ("kn", "N"),
        ("wr", "R"),
        ("wh", "W"),
        ("ee", "I"),
        ("ea", "I"),
        ("oo", "U"),
        ("ou", "AW"),
        ("ow", "AW"),
        ("ai", "AY"),
        ("ay", "AY"),
        ("oi", "OY"),
        ("oy", "OY"),
    ],
    strip_tashkeel: false,
    silent_endings: &[],
    collapse_doubles: true,
    uppercase_result: true,
};

// =========================================================================
// Arabic
// =========================================================================
//
// Arabic spelling errors cluster on letter variants rather than sounds:
// ta marbuta vs ha, the alif family, and hamza carriers. Vocalization
// marks are optional in writing and are stripped entirely.

pub const ARABIC: PhonemeRules = PhonemeRules {
    lowercase_input: false,
    char_folds: &[
        ('ة', 'ه'), // ta marbuta -> ha
        ('ى', 'ي'), // alif maqsura -> ya
        ('أ', 'ا'), // hamza on alif -> alif
        ('إ', 'ا'),
        ('آ', 'ا'),
        ('ٱ', 'ا'),
        ('ئ', 'ي'), // hamza on ya -> ya
        ('ؤ', 'و'), // hamza on waw -> waw
    ],
    glyph_map: &[],
    rewrites: &[],
    strip_tashkeel: true,
    silent_endings: &[],
    collapse_doubles: false,
    uppercase_result: false,
};

/// Arabic vocalization marks (tashkeel) plus the dagger alif.
pub fn is_tashkeel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

// =========================================================================
// Tachelhit (Tifinagh script)
// =========================================================================
//
// Each Tifinagh glyph maps to one Latin phoneme symbol. Emphatic
// consonants fold onto their plain counterparts (ⴹ/ⴷ, ⵟ/ⵜ, …) since they
// are the most common confusion in typed Tachelhit.

pub const TACHELHIT_TIFINAGH: PhonemeRules = PhonemeRules {
    lowercase_input: false,
    char_folds: &[],
    glyph_map: &[
        ('ⴰ', "A"),
        ('ⴱ', "B"),
        ('ⴳ', "G"),
        ('ⴷ', "D"),
        ('ⴹ', "D"),
        ('ⴼ', "F"),
        ('ⴽ', "K"),
        ('ⵀ', "H"),
        ('ⵃ', "H"),
        ('ⵄ', "A"),
        ('ⵅ', "X"),
        ('ⵉ', "I"),
        ('ⵊ', "J"),
        ('ⵍ', "L"),
        ('ⵎ', "M"),
        ('ⵏ', "N"),
        ('ⵓ', "U"),
        ('ⵔ', "R"),
        ('ⵕ', "R"),
        ('ⵙ', "S"),
        ('ⵚ', "S"),
        ('ⵜ', "T"),
        ('ⵟ', "T"),
        ('ⵡ', "W"),
        ('ⵢ', "Y"),
        ('ⵣ', "Z"),
        ('ⵥ', "Z"),
        ('ⵇ', "Q"),
        ('ⵛ', "SH"),
        ('ⵖ', "GH"),
        ('ⵯ', "W"),
    ],
    rewrites: &[],
    strip_tashkeel: false,
    silent_endings: &[],
    collapse_doubles: false,
    uppercase_result: false,
};

// =========================================================================
// Tachelhit (Latin transliteration)
// =========================================================================

pub const TACHELHIT_LATIN: PhonemeRules = PhonemeRules {
    lowercase_input: true,
    char_folds: &[],
    glyph_map: &[],
    rewrites: &[
        ("ɣ", "GH"),
        ("ɛ", "A"),
        ("ḥ", "H"),
        ("ḍ", "D"),
        ("ṛ", "R"),
        ("ṣ", "S"),
        ("ṭ", "T"),
        ("ẓ", "Z"),
        ("š", "SH"),
        ("č", "CH"),
        ("gʷ", "GW"),
        ("kʷ", "KW"),
    ],
    strip_tashkeel: false,
    silent_endings: &[],
    collapse_doubles: true,
    uppercase_result: true,
};
