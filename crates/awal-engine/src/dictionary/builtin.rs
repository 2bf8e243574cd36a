// Built-in fallback word lists.
//
// Installed when a language's dictionary file cannot be read, so the
// engine always has a minimal vocabulary to rank against. Lists hold the
// most frequent words of each language, frequency-ordered like the real
// dictionary files, already lowercase.

/// French fallback vocabulary.
pub const FRENCH: &[&str] = &[
    // articles and determiners
    "le", "la", "les", "un", "une", "des", "du", "de", "au", "aux",
    // pronouns
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles",
    "me", "te", "se", "lui", "leur", "ce", "ça", "cela", "ceci",
    "qui", "que", "quoi", "dont", "où", "moi", "toi", "soi",
    // frequent verbs
    "être", "avoir", "faire", "dire", "aller", "voir", "savoir", "pouvoir",
    "vouloir", "venir", "devoir", "falloir", "prendre", "donner", "parler",
    "aimer", "passer", "trouver", "mettre", "croire", "demander", "rester",
    "est", "suis", "es", "sommes", "êtes", "sont", "ai", "as", "a", "avons",
    "avez", "ont", "fait", "fais", "va", "vais", "vas", "allons", "allez", "vont",
    "dit", "dis", "vois", "voit", "sait", "peut", "peux", "veut", "veux",
    "vient", "dois", "doit", "faut", "prend", "prends", "donne", "donnes",
    "parle", "parles", "aime", "aimes", "passe", "passes", "trouve", "trouves",
    "sera", "serai", "seras", "serons", "serez", "seront",
    "était", "étais", "étions", "étiez", "étaient",
    "avait", "avais", "avions", "aviez", "avaient",
    // prepositions and conjunctions
    "à", "dans", "en", "sur", "pour", "par", "avec", "sans", "sous",
    "entre", "vers", "chez", "après", "avant", "depuis", "pendant",
    "et", "ou", "mais", "donc", "car", "ni", "si", "quand",
    "comme", "lorsque", "puisque", "parce",
    // adverbs
    "ne", "pas", "plus", "bien", "très", "aussi", "tout", "trop",
    "encore", "déjà", "toujours", "jamais", "rien", "vraiment",
    "même", "ici", "là", "maintenant", "alors", "puis",
    "comment", "pourquoi", "combien", "oui", "non", "peut-être",
    // frequent adjectives
    "bon", "bonne", "petit", "petite", "grand", "grande", "nouveau", "nouvelle",
    "premier", "première", "dernier", "dernière", "autre", "toute",
    "beau", "belle", "vieux", "vieille", "jeune", "long", "longue",
    // frequent nouns
    "homme", "femme", "enfant", "jour", "temps", "année", "fois",
    "monde", "vie", "main", "chose", "pays", "moment", "heure",
    "maison", "travail", "père", "mère", "fils", "fille",
    "bonjour", "merci", "salut", "bonsoir",
    "problème", "question", "réponse", "idée", "exemple",
    // frequent in mobile typing
    "ok", "lol", "mdr", "stp", "svp",
    "demain", "aujourd'hui", "hier", "soir", "matin",
    "message", "téléphone", "numéro", "adresse", "nom", "prénom",
];

/// Arabic fallback vocabulary.
pub const ARABIC: &[&str] = &[
    "في", "من", "على", "إلى", "عن", "مع", "هذا", "هذه", "ذلك", "تلك",
    "أن", "كان", "قال", "بعد", "قبل", "كل", "بين", "حتى", "لم", "لا",
    "ما", "هل", "أنا", "أنت", "هو", "هي", "نحن", "هم", "كيف", "أين",
    "متى", "لماذا", "ماذا", "الله", "بسم", "الرحمن", "الرحيم",
    "يوم", "سنة", "وقت", "بيت", "مدرسة", "كتاب", "ماء", "أكل",
    "شكرا", "مرحبا", "أهلا", "سلام", "نعم", "صباح", "مساء", "خير",
    "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية",
    "كبير", "صغير", "جديد", "قديم", "جميل", "طيب", "حسن",
    "يريد", "يعرف", "يقول", "يذهب", "يأتي", "يعمل", "يحب",
];

/// English fallback vocabulary.
pub const ENGLISH: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see",
    "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first", "well",
    "way", "even", "new", "want", "because", "any", "these", "give", "day", "most",
    "hello", "thanks", "please", "sorry", "yes", "yeah", "ok", "okay",
];

/// Tachelhit (Tifinagh script) fallback vocabulary.
pub const TACHELHIT_TIFINAGH: &[&str] = &[
    "ⴰⵣⵓⵍ",      // azul (hello)
    "ⵜⴰⵏⵎⵉⵔⵜ",   // tanmirt (thank you)
    "ⵉⵢⵢⵀ",      // iyyeh (yes)
    "ⵓⵀⵓ",       // uhu (no)
    "ⴰⵎⴽ",       // amek (how)
    "ⵎⴰⵏⵉ",      // mani (where)
    "ⵎⴰⵜⴰ",      // mata (what)
    "ⵎⵍⵎⵉ",      // melmi (when)
    "ⵎⴰⵅ",       // max (why)
    "ⴰⴼⵍⵍⴰ",     // afella (up)
    "ⴰⴷⴷⴰ",      // adda (down)
    "ⵜⴰⴷⴷⴰⵔⵜ",   // taddart (house)
    "ⴰⵔⴳⴰⵣ",     // argaz (man)
    "ⵜⴰⵎⵖⴰⵔⵜ",   // tamghart (woman)
    "ⴰⴼⵔⵓⵅ",     // afrukh (child)
    "ⴰⵎⴰⵏ",      // aman (water)
    "ⴰⵖⵔⵓⵎ",     // aghrum (bread)
    "ⵜⵉⴼⴰⵡⵜ",    // tifawt (light, morning)
    "ⵜⵉⴷⴷⵉⵜ",    // tiddit (truth)
    "ⵜⴰⵎⴰⵣⵉⵖⵜ",  // tamazight
    "ⴰⵙⵙ",       // ass (day)
    "ⵉⴹ",        // id (night)
    "ⴰⵙⴳⴳⵯⴰⵙ",   // asggwas (year)
    "ⵜⴰⵡⵊⴰ",     // tawja (family)
];

/// Tachelhit (Latin transliteration) fallback vocabulary.
pub const TACHELHIT_LATIN: &[&str] = &[
    "azul", "tanmirt", "iyyeh", "uhu",
    "amek", "mani", "mata", "melmi", "max",
    "afella", "adda",
    "taddart", "argaz", "tamghart", "afrukh",
    "aman", "aghrum", "tifawt", "tiddit",
    "tamazight", "tachelhit", "souss",
    "ass", "id", "asggwas", "tawja",
    "ur", "ad", "ra", "iga", "illa",
    "zund", "ntta", "nttat", "nkki", "kmmi",
    "lḥmd", "bslama", "mrhba",
    "yallah", "bzzaf", "chwiya", "mezyan",
    "lxir", "lɛafit", "ssalam",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_are_lowercase_and_nonempty() {
        for list in [FRENCH, ARABIC, ENGLISH, TACHELHIT_TIFINAGH, TACHELHIT_LATIN] {
            assert!(!list.is_empty());
            for word in list {
                assert!(!word.is_empty());
                assert_eq!(**word, word.to_lowercase(), "{word} is not lowercase");
            }
        }
    }

    #[test]
    fn latin_and_tifinagh_lists_share_core_vocabulary() {
        // The two Tachelhit variants spell the same words in two scripts.
        assert!(TACHELHIT_LATIN.contains(&"azul"));
        assert!(TACHELHIT_TIFINAGH.contains(&"ⴰⵣⵓⵍ"));
    }
}
