//! Static lookup tables consulted by the resolver
//!
//! Script and country tables cover the subset of ISO 15924 / ISO 3166-1
//! actually seen in request titles. The misspelling and deprecated-code
//! tables redirect common bad input to a canonical query string that the
//! resolver retries from the top.

/// ISO 15924 script code (title case) to script name.
pub fn script_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "Arab" => "Arabic",
        "Armn" => "Armenian",
        "Beng" => "Bengali",
        "Cans" => "Canadian Aboriginal Syllabics",
        "Cher" => "Cherokee",
        "Cyrl" => "Cyrillic",
        "Deva" => "Devanagari",
        "Ethi" => "Ethiopic",
        "Geor" => "Georgian",
        "Grek" => "Greek",
        "Hani" => "Han",
        "Hans" => "Han (Simplified)",
        "Hant" => "Han (Traditional)",
        "Hebr" => "Hebrew",
        "Jpan" => "Japanese",
        "Kana" => "Katakana",
        "Khmr" => "Khmer",
        "Knda" => "Kannada",
        "Kore" => "Korean",
        "Laoo" => "Lao",
        "Latn" => "Latin",
        "Mlym" => "Malayalam",
        "Mong" => "Mongolian",
        "Mymr" => "Myanmar",
        "Orya" => "Oriya",
        "Runr" => "Runic",
        "Sinh" => "Sinhala",
        "Syrc" => "Syriac",
        "Taml" => "Tamil",
        "Telu" => "Telugu",
        "Tfng" => "Tifinagh",
        "Thaa" => "Thaana",
        "Thai" => "Thai",
        "Tibt" => "Tibetan",
        "Xsux" => "Cuneiform",
        _ => return None,
    };
    Some(name)
}

/// ISO 3166-1 alpha-2 region code (upper case) to country name.
pub fn country_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "AR" => "Argentina",
        "AT" => "Austria",
        "BD" => "Bangladesh",
        "BR" => "Brazil",
        "CA" => "Canada",
        "CH" => "Switzerland",
        "CN" => "China",
        "CO" => "Colombia",
        "DE" => "Germany",
        "DK" => "Denmark",
        "EG" => "Egypt",
        "ES" => "Spain",
        "FI" => "Finland",
        "FR" => "France",
        "GB" => "United Kingdom",
        "GR" => "Greece",
        "HK" => "Hong Kong",
        "ID" => "Indonesia",
        "IL" => "Israel",
        "IN" => "India",
        "IQ" => "Iraq",
        "IR" => "Iran",
        "IT" => "Italy",
        "JP" => "Japan",
        "KR" => "South Korea",
        "LK" => "Sri Lanka",
        "MA" => "Morocco",
        "MO" => "Macau",
        "MX" => "Mexico",
        "MY" => "Malaysia",
        "NL" => "Netherlands",
        "NO" => "Norway",
        "NP" => "Nepal",
        "PH" => "Philippines",
        "PK" => "Pakistan",
        "PL" => "Poland",
        "PT" => "Portugal",
        "RU" => "Russia",
        "SA" => "Saudi Arabia",
        "SE" => "Sweden",
        "SG" => "Singapore",
        "TH" => "Thailand",
        "TR" => "Turkey",
        "TW" => "Taiwan",
        "UA" => "Ukraine",
        "US" => "United States",
        "VN" => "Vietnam",
        _ => return None,
    };
    Some(name)
}

/// Frequent misspellings and ad-hoc abbreviations seen in titles, mapped to
/// the query the writer meant. Keys are lower case.
pub fn correct_misspelling(text: &str) -> Option<&'static str> {
    let corrected = match text {
        "aramaean" => "aramaic",
        "bengalese" => "bengali",
        "chinease" => "chinese",
        "chines" => "chinese",
        "chinses" => "chinese",
        "cn" => "chinese",
        "filipino" => "tagalog",
        "flemish" => "dutch",
        "gaelic" => "scottish gaelic",
        "gr" => "greek",
        "japanes" => "japanese",
        "japanease" => "japanese",
        "jp" => "japanese",
        "jpn" => "japanese",
        "kanji" => "japanese",
        "kr" => "korean",
        "krn" => "korean",
        "mandarin" => "chinese",
        "mx" => "spanish",
        "portugese" => "portuguese",
        "prs" => "dari",
        "sp" => "spanish",
        "taiwanese" => "chinese",
        "viet" => "vietnamese",
        "vietnamise" => "vietnamese",
        "vn" => "vietnamese",
        _ => return None,
    };
    Some(corrected)
}

/// Withdrawn ISO 639-1 codes still common in the wild, mapped to the code
/// that replaced them.
pub fn deprecated_code(code: &str) -> Option<&'static str> {
    let current = match code {
        "in" => "id",
        "iw" => "he",
        "ji" => "yi",
        "jw" => "jv",
        "mo" => "ro",
        "scc" => "sr",
        "scr" => "hr",
        _ => return None,
    };
    Some(current)
}

/// Short English function words that are never language codes in context.
/// Filtered out before per-word chunk resolution so "to" is not read as
/// Tonga or "an" as Aragonese.
pub fn is_code_stopword(word: &str) -> bool {
    matches!(
        word,
        "a" | "an"
            | "and"
            | "any"
            | "are"
            | "as"
            | "at"
            | "be"
            | "for"
            | "he"
            | "hi"
            | "id"
            | "if"
            | "in"
            | "is"
            | "it"
            | "me"
            | "my"
            | "no"
            | "of"
            | "off"
            | "old"
            | "on"
            | "or"
            | "so"
            | "the"
            | "to"
            | "use"
            | "we"
            | "what"
            | "who"
            | "with"
            | "you"
    )
}

/// Platform bookkeeping tokens that may appear in language lists but never
/// name a language. List resolution skips them silently.
pub fn is_reserved_token(token: &str) -> bool {
    matches!(token, "app" | "community" | "meta" | "none" | "wiki")
}

/// Inputs that score well against some language name by accident. Fuzzy
/// matching refuses to run on these.
pub fn is_fuzzy_ignored(text: &str) -> bool {
    matches!(
        text,
        "argentina"
            | "austria"
            | "belgium"
            | "brazil"
            | "canada"
            | "china"
            | "cursive"
            | "help"
            | "india"
            | "language"
            | "lyrics"
            | "mexico"
            | "song"
            | "switzerland"
            | "text"
            | "translate"
            | "translation"
            | "writing"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_lookup() {
        assert_eq!(script_name("Cyrl"), Some("Cyrillic"));
        assert_eq!(script_name("Zzzz"), None);
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(country_name("CN"), Some("China"));
        assert_eq!(country_name("XX"), None);
    }

    #[test]
    fn test_misspellings_redirect() {
        assert_eq!(correct_misspelling("vn"), Some("vietnamese"));
        assert_eq!(correct_misspelling("portugese"), Some("portuguese"));
        assert_eq!(correct_misspelling("vietnamese"), None);
    }

    #[test]
    fn test_deprecated_codes() {
        assert_eq!(deprecated_code("iw"), Some("he"));
        assert_eq!(deprecated_code("he"), None);
    }

    #[test]
    fn test_stopwords_and_reserved() {
        assert!(is_code_stopword("to"));
        assert!(!is_code_stopword("de"));
        assert!(is_reserved_token("meta"));
        assert!(!is_reserved_token("latin"));
    }
}
