//! Known language tokens.
//!
//! The explicit registry carries display names for the per-language models
//! that ship configs; the four family lists group tokens that share one
//! script dictionary.

/// Explicitly supported languages (token, display name).
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("it", "italian"),
    ("xi", "spanish"),
    ("pu", "portuguese"),
    ("ru", "russian"),
    ("ar", "arabic"),
    ("ta", "tamil"),
    ("ug", "uyghur"),
    ("fa", "persian"),
    ("ur", "urdu"),
    ("rs", "serbian latin"),
    ("oc", "occitan"),
    ("rsc", "serbian cyrillic"),
    ("bg", "bulgarian"),
    ("uk", "ukranian"),
    ("be", "belarusian"),
    ("te", "telugu"),
    ("ka", "kannada"),
    ("chinese_cht", "chinese tradition"),
    ("hi", "hindi"),
    ("mr", "marathi"),
    ("ne", "nepali"),
];

/// Tokens written in Latin script.
pub const LATIN: &[&str] = &[
    "af", "az", "bs", "cs", "cy", "da", "de", "es", "et", "fr", "ga", "hr", "hu", "id", "is",
    "it", "ku", "la", "lt", "lv", "mi", "ms", "mt", "nl", "no", "oc", "pi", "pl", "pt", "ro",
    "rs_latin", "sk", "sl", "sq", "sv", "sw", "tl", "tr", "uz", "vi", "latin",
];

/// Tokens written in Arabic script.
pub const ARABIC: &[&str] = &["ar", "fa", "ug", "ur"];

/// Tokens written in Cyrillic script.
pub const CYRILLIC: &[&str] = &[
    "ru",
    "rs_cyrillic",
    "be",
    "bg",
    "uk",
    "mn",
    "abq",
    "ady",
    "kbd",
    "ava",
    "dar",
    "inh",
    "che",
    "lbe",
    "lez",
    "tab",
    "cyrillic",
];

/// Tokens written in Devanagari script.
pub const DEVANAGARI: &[&str] = &[
    "hi",
    "mr",
    "ne",
    "bh",
    "mai",
    "ang",
    "bho",
    "mah",
    "sck",
    "new",
    "gom",
    "sa",
    "bgc",
    "devanagari",
];

/// Display name for a registry token.
pub fn display_name(token: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_family_lists_have_no_duplicates() {
        for list in [LATIN, ARABIC, CYRILLIC, DEVANAGARI] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_family_lists_are_disjoint() {
        let lists = [LATIN, ARABIC, CYRILLIC, DEVANAGARI];
        for (i, a) in lists.iter().enumerate() {
            for b in lists.iter().skip(i + 1) {
                assert!(a.iter().all(|t| !b.contains(t)));
            }
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("rsc"), Some("serbian cyrillic"));
        assert_eq!(display_name("latin"), None);
    }
}
