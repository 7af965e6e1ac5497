//! Embedded core language table
//!
//! Every language the platform recognizes without consulting the on-disk
//! auxiliary table. `supported` marks languages with a dedicated platform
//! category; rate fields are rolling request statistics used by the points
//! and notification collaborators. Empty string fields mean "not present"
//! and are converted to `None` when the catalog is built.

pub(crate) struct LanguageRecord {
    pub name: &'static str,
    pub alternates: &'static [&'static str],
    pub code_2: &'static str,
    pub code_3: &'static str,
    pub script: &'static str,
    pub country: &'static str,
    pub family: &'static str,
    pub population: u64,
    pub supported: bool,
    pub monthly_rate: f64,
    pub search_rate: f64,
}

macro_rules! lang {
    ($name:literal, $alts:expr, $c2:literal, $c3:literal, $script:literal,
     $country:literal, $family:literal, $pop:literal, $sup:literal,
     $monthly:literal, $search:literal) => {
        LanguageRecord {
            name: $name,
            alternates: $alts,
            code_2: $c2,
            code_3: $c3,
            script: $script,
            country: $country,
            family: $family,
            population: $pop,
            supported: $sup,
            monthly_rate: $monthly,
            search_rate: $search,
        }
    };
}

#[rustfmt::skip]
pub(crate) const LANGUAGES: &[LanguageRecord] = &[
    lang!("Afrikaans", &[], "af", "afr", "Latn", "South Africa", "Indo-European", 7_200_000, false, 4.1, 0.2),
    lang!("Albanian", &["shqip"], "sq", "sqi", "Latn", "Albania", "Indo-European", 7_500_000, false, 2.3, 0.1),
    lang!("Amharic", &[], "am", "amh", "Ethi", "Ethiopia", "Afro-Asiatic", 32_000_000, false, 3.0, 0.2),
    lang!("Arabic", &["modern standard arabic"], "ar", "ara", "Arab", "Egypt", "Afro-Asiatic", 310_000_000, true, 186.0, 4.1),
    lang!("Armenian", &["hayeren"], "hy", "hye", "Armn", "Armenia", "Indo-European", 6_700_000, false, 6.2, 0.3),
    lang!("Bengali", &["bangla"], "bn", "ben", "Beng", "Bangladesh", "Indo-European", 230_000_000, false, 8.8, 0.4),
    lang!("Bosnian", &[], "bs", "bos", "Latn", "Bosnia and Herzegovina", "Indo-European", 2_500_000, false, 1.4, 0.1),
    lang!("Bulgarian", &[], "bg", "bul", "Cyrl", "Bulgaria", "Indo-European", 8_000_000, false, 3.9, 0.2),
    lang!("Burmese", &["myanmar"], "my", "mya", "Mymr", "Myanmar", "Sino-Tibetan", 33_000_000, false, 4.4, 0.2),
    lang!("Catalan", &[], "ca", "cat", "Latn", "Spain", "Indo-European", 4_100_000, false, 1.9, 0.1),
    lang!("Chinese", &["mandarin chinese", "simplified chinese", "traditional chinese", "zhongwen"], "zh", "zho", "Hani", "China", "Sino-Tibetan", 1_120_000_000, true, 620.5, 14.8),
    lang!("Croatian", &["hrvatski"], "hr", "hrv", "Latn", "Croatia", "Indo-European", 5_600_000, false, 2.8, 0.1),
    lang!("Czech", &["cestina"], "cs", "ces", "Latn", "Czechia", "Indo-European", 10_700_000, false, 5.1, 0.3),
    lang!("Danish", &["dansk"], "da", "dan", "Latn", "Denmark", "Indo-European", 5_500_000, false, 4.7, 0.2),
    lang!("Dari", &["afghan persian"], "", "prs", "Arab", "Afghanistan", "Indo-European", 12_500_000, false, 1.1, 0.1),
    lang!("Dutch", &["nederlands"], "nl", "nld", "Latn", "Netherlands", "Indo-European", 25_000_000, true, 22.6, 0.8),
    lang!("English", &[], "en", "eng", "Latn", "United States", "Indo-European", 380_000_000, true, 0.0, 0.0),
    lang!("Estonian", &["eesti"], "et", "est", "Latn", "Estonia", "Uralic", 1_100_000, false, 1.2, 0.1),
    lang!("Finnish", &["suomi"], "fi", "fin", "Latn", "Finland", "Uralic", 5_400_000, false, 5.3, 0.3),
    lang!("French", &["francais"], "fr", "fra", "Latn", "France", "Indo-European", 80_000_000, true, 204.9, 5.3),
    lang!("Georgian", &["kartuli"], "ka", "kat", "Geor", "Georgia", "Kartvelian", 3_700_000, false, 2.6, 0.1),
    lang!("German", &["deutsch", "hochdeutsch"], "de", "deu", "Latn", "Germany", "Indo-European", 95_000_000, true, 229.4, 6.0),
    lang!("Greek", &["ellinika", "modern greek"], "el", "ell", "Grek", "Greece", "Indo-European", 13_500_000, true, 25.7, 0.9),
    lang!("Ancient Greek", &["classical greek", "koine greek"], "", "grc", "Grek", "Greece", "Indo-European", 0, false, 8.2, 0.4),
    lang!("Gujarati", &[], "gu", "guj", "", "India", "Indo-European", 57_000_000, false, 1.5, 0.1),
    lang!("Haitian Creole", &["kreyol"], "ht", "hat", "Latn", "Haiti", "Creole", 9_600_000, false, 1.0, 0.1),
    lang!("Hebrew", &["ivrit"], "he", "heb", "Hebr", "Israel", "Afro-Asiatic", 9_000_000, true, 42.3, 1.4),
    lang!("Hindi", &[], "hi", "hin", "Deva", "India", "Indo-European", 345_000_000, true, 31.8, 1.0),
    lang!("Hungarian", &["magyar"], "hu", "hun", "Latn", "Hungary", "Uralic", 13_000_000, false, 6.9, 0.3),
    lang!("Icelandic", &["islenska"], "is", "isl", "Latn", "Iceland", "Indo-European", 330_000, false, 1.8, 0.1),
    lang!("Indonesian", &["bahasa indonesia"], "id", "ind", "Latn", "Indonesia", "Austronesian", 43_000_000, true, 12.4, 0.5),
    lang!("Irish", &["gaeilge", "irish gaelic"], "ga", "gle", "Latn", "Ireland", "Indo-European", 1_800_000, false, 3.3, 0.2),
    lang!("Italian", &["italiano"], "it", "ita", "Latn", "Italy", "Indo-European", 65_000_000, true, 84.0, 2.6),
    lang!("Japanese", &["nihongo"], "ja", "jpn", "Jpan", "Japan", "Japonic", 125_000_000, true, 1042.7, 22.1),
    lang!("Javanese", &[], "jv", "jav", "Latn", "Indonesia", "Austronesian", 82_000_000, false, 0.6, 0.1),
    lang!("Kannada", &[], "kn", "kan", "Knda", "India", "Dravidian", 44_000_000, false, 1.3, 0.1),
    lang!("Kazakh", &[], "kk", "kaz", "Cyrl", "Kazakhstan", "Turkic", 13_000_000, false, 1.6, 0.1),
    lang!("Khmer", &["cambodian"], "km", "khm", "Khmr", "Cambodia", "Austroasiatic", 16_000_000, false, 4.9, 0.2),
    lang!("Korean", &["hangul"], "ko", "kor", "Kore", "South Korea", "Koreanic", 81_000_000, true, 438.2, 11.5),
    lang!("Kurdish", &["kurmanji", "sorani"], "ku", "kur", "", "Iraq", "Indo-European", 26_000_000, false, 2.1, 0.1),
    lang!("Lao", &[], "lo", "lao", "Laoo", "Laos", "Kra-Dai", 3_700_000, false, 1.7, 0.1),
    lang!("Latin", &[], "la", "lat", "Latn", "Italy", "Indo-European", 0, true, 94.6, 3.2),
    lang!("Latvian", &["latviesu"], "lv", "lav", "Latn", "Latvia", "Indo-European", 1_500_000, false, 1.1, 0.1),
    lang!("Lithuanian", &["lietuviu"], "lt", "lit", "Latn", "Lithuania", "Indo-European", 2_800_000, false, 1.5, 0.1),
    lang!("Macedonian", &[], "mk", "mkd", "Cyrl", "North Macedonia", "Indo-European", 1_600_000, false, 1.0, 0.1),
    lang!("Malay", &["bahasa melayu"], "ms", "msa", "Latn", "Malaysia", "Austronesian", 33_000_000, false, 3.6, 0.2),
    lang!("Malayalam", &[], "ml", "mal", "Mlym", "India", "Dravidian", 35_000_000, false, 1.4, 0.1),
    lang!("Marathi", &[], "mr", "mar", "Deva", "India", "Indo-European", 83_000_000, false, 1.2, 0.1),
    lang!("Middle English", &[], "", "enm", "Latn", "United Kingdom", "Indo-European", 0, false, 1.9, 0.1),
    lang!("Mongolian", &[], "mn", "mon", "Cyrl", "Mongolia", "Mongolic", 5_200_000, false, 2.4, 0.1),
    lang!("Nepali", &[], "ne", "nep", "Deva", "Nepal", "Indo-European", 16_000_000, false, 2.0, 0.1),
    lang!("Norwegian", &["bokmal", "norsk", "nynorsk"], "no", "nor", "Latn", "Norway", "Indo-European", 5_300_000, false, 5.8, 0.2),
    lang!("Old English", &["anglo-saxon"], "", "ang", "Latn", "United Kingdom", "Indo-European", 0, false, 1.6, 0.1),
    lang!("Pashto", &[], "ps", "pus", "Arab", "Afghanistan", "Indo-European", 40_000_000, false, 1.8, 0.1),
    lang!("Persian", &["farsi"], "fa", "fas", "Arab", "Iran", "Indo-European", 62_000_000, true, 28.3, 1.1),
    lang!("Polish", &["polski"], "pl", "pol", "Latn", "Poland", "Indo-European", 40_000_000, true, 49.5, 1.7),
    lang!("Portuguese", &["portugues"], "pt", "por", "Latn", "Portugal", "Indo-European", 220_000_000, true, 53.1, 1.9),
    lang!("Punjabi", &["panjabi"], "pa", "pan", "", "India", "Indo-European", 113_000_000, false, 2.7, 0.1),
    lang!("Romanian", &["romana"], "ro", "ron", "Latn", "Romania", "Indo-European", 24_000_000, false, 6.4, 0.3),
    lang!("Russian", &["russkiy"], "ru", "rus", "Cyrl", "Russia", "Indo-European", 150_000_000, true, 282.6, 8.9),
    lang!("Scottish Gaelic", &["gaidhlig"], "gd", "gla", "Latn", "United Kingdom", "Indo-European", 57_000, false, 1.2, 0.1),
    lang!("Serbian", &["srpski"], "sr", "srp", "Cyrl", "Serbia", "Indo-European", 8_800_000, false, 3.5, 0.2),
    lang!("Sinhala", &["sinhalese"], "si", "sin", "Sinh", "Sri Lanka", "Indo-European", 16_000_000, false, 1.9, 0.1),
    lang!("Slovak", &["slovencina"], "sk", "slk", "Latn", "Slovakia", "Indo-European", 5_200_000, false, 2.2, 0.1),
    lang!("Slovenian", &["slovenscina"], "sl", "slv", "Latn", "Slovenia", "Indo-European", 2_100_000, false, 1.3, 0.1),
    lang!("Somali", &[], "so", "som", "Latn", "Somalia", "Afro-Asiatic", 22_000_000, false, 1.1, 0.1),
    lang!("Spanish", &["castilian", "espanol"], "es", "spa", "Latn", "Spain", "Indo-European", 480_000_000, true, 355.9, 9.4),
    lang!("Swahili", &["kiswahili"], "sw", "swa", "Latn", "Tanzania", "Niger-Congo", 18_000_000, false, 2.5, 0.1),
    lang!("Swedish", &["svenska"], "sv", "swe", "Latn", "Sweden", "Indo-European", 10_000_000, true, 13.7, 0.5),
    lang!("Tagalog", &[], "tl", "tgl", "Latn", "Philippines", "Austronesian", 29_000_000, true, 10.9, 0.4),
    lang!("Tamil", &[], "ta", "tam", "Taml", "India", "Dravidian", 79_000_000, false, 4.2, 0.2),
    lang!("Telugu", &[], "te", "tel", "Telu", "India", "Dravidian", 83_000_000, false, 2.3, 0.1),
    lang!("Thai", &[], "th", "tha", "Thai", "Thailand", "Kra-Dai", 61_000_000, true, 39.0, 1.3),
    lang!("Tibetan", &[], "bo", "bod", "Tibt", "China", "Sino-Tibetan", 1_200_000, false, 5.5, 0.3),
    lang!("Turkish", &["turkce"], "tr", "tur", "Latn", "Turkey", "Turkic", 84_000_000, true, 34.4, 1.2),
    lang!("Ukrainian", &["ukrainska"], "uk", "ukr", "Cyrl", "Ukraine", "Indo-European", 33_000_000, true, 17.2, 0.6),
    lang!("Urdu", &[], "ur", "urd", "Arab", "Pakistan", "Indo-European", 70_000_000, false, 5.0, 0.2),
    lang!("Uzbek", &[], "uz", "uzb", "Latn", "Uzbekistan", "Turkic", 34_000_000, false, 1.4, 0.1),
    lang!("Vietnamese", &["tieng viet"], "vi", "vie", "Latn", "Vietnam", "Austroasiatic", 85_000_000, true, 77.8, 2.7),
    lang!("Welsh", &["cymraeg"], "cy", "cym", "Latn", "United Kingdom", "Indo-European", 890_000, false, 2.9, 0.1),
    lang!("Yiddish", &[], "yi", "yid", "Hebr", "Israel", "Indo-European", 1_500_000, false, 3.1, 0.2),
    lang!("Yue", &["cantonese"], "", "yue", "Hani", "Hong Kong", "Sino-Tibetan", 85_000_000, false, 9.7, 0.4),
    // Platform pseudo-languages. "Unknown" carries no code on purpose so its
    // preferred code falls through to the "unknown" sentinel.
    lang!("Unknown", &["?", "unidentified", "unknown language"], "", "", "", "", "", 0, true, 131.2, 0.0),
    lang!("Multiple Languages", &["multiple", "various"], "", "mul", "", "", "", 0, true, 15.3, 0.0),
    lang!("Nonlanguage", &["conlang", "gibberish", "not a language"], "", "zxx", "", "", "", 0, false, 2.2, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_codes_are_well_formed() {
        for record in LANGUAGES {
            assert!(!record.name.is_empty());
            assert!(record.code_2.is_empty() || record.code_2.len() == 2);
            assert!(record.code_3.is_empty() || record.code_3.len() == 3);
            assert!(record.script.is_empty() || record.script.len() == 4);
        }
    }

    #[test]
    fn test_no_duplicate_primary_codes() {
        let mut seen = std::collections::HashSet::new();
        for record in LANGUAGES {
            if !record.code_2.is_empty() {
                assert!(seen.insert(record.code_2), "dup code {}", record.code_2);
            }
        }
    }
}
