//! Title pre-cleaning
//!
//! Raw titles arrive with crosspost markers, lookalike glyphs for the
//! bracket tag, misspellings of the canonical language, and tags buried
//! mid-title. Pre-cleaning normalizes all of that so chunk extraction can
//! work on one shape: `[source SEP target] free text`.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Catalog, fuzzy};

/// Minimum plain-ratio score for rewriting a word into the canonical
/// language name.
pub(crate) const MISSPELLING_THRESHOLD: u32 = 70;

/// How many words on each side of a bare separator are scanned when
/// synthesizing a bracket.
pub(crate) const SYNTH_SCAN_DEPTH: usize = 5;

static CROSSPOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(?\s*(?:x-?post(?:ed)?|crosspost(?:ed)?)\b[^)\]]*\)?").unwrap());
static MID_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[([^\[\]]*)\](.*)$").unwrap());
static REPEATED_ARROWS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s*>\s*)+").unwrap());
static REPEATED_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

pub(crate) enum CleanOutcome {
    Cleaned(String),
    /// The title is an explicit "I don't know what this is" placeholder.
    Unresolvable(String),
}

pub(crate) fn preclean(raw: &str, catalog: &Catalog) -> CleanOutcome {
    let mut title = raw.trim().to_string();

    title = CROSSPOST.replace_all(&title, " ").into_owned();
    title = normalize_canonical_misspellings(&title, catalog);
    title = normalize_glyphs(&title);

    if let Some(content) = bracket_content(&title) {
        if !content.chars().any(|c| c.is_alphanumeric()) {
            return CleanOutcome::Unresolvable(collapse(&title));
        }
    }

    if !title.contains('[') {
        if let Some(with_bracket) = synthesize_bracket(&title, catalog) {
            title = with_bracket;
        }
    }

    title = relocate_bracket(&title);
    CleanOutcome::Cleaned(collapse(&title))
}

/// Map observed glyph variants of the tag punctuation to canonical `[ ] > -`.
fn normalize_glyphs(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '【' | '〖' | '〔' | '［' | '「' | '『' => '[',
            '】' | '〗' | '〕' | '］' | '」' | '』' => ']',
            '〉' | '》' | '＞' | '→' | '⇒' | '➜' | '›' => '>',
            '〈' | '《' | '＜' | '←' => '<',
            '－' | '‐' | '‑' | '‒' | '–' | '—' => '-',
            '：' => ':',
            '　' => ' ',
            other => other,
        })
        .collect()
}

/// Rewrite close misspellings of the canonical language name word by word,
/// so "Enlgish" and "Englisch" both read "English" downstream.
fn normalize_canonical_misspellings(title: &str, catalog: &Catalog) -> String {
    let canonical = catalog.canonical().name.clone();
    let canonical_lower = canonical.to_lowercase();

    title
        .split_whitespace()
        .map(|word| {
            let core: String = word
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if core.len() >= 4
                && core != canonical_lower
                && fuzzy::ratio(&core, &canonical_lower) >= MISSPELLING_THRESHOLD
            {
                // Keep surrounding punctuation, swap the word itself.
                word.replace(
                    word.trim_matches(|c: char| !c.is_alphanumeric()),
                    &canonical,
                )
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bracket_content(title: &str) -> Option<&str> {
    let start = title.find('[')?;
    let rest = &title[start + 1..];
    let end = rest.find(']')?;
    Some(&rest[..end])
}

/// No bracket anywhere, but the title may still carry a "lang > lang" or
/// "lang to lang" shape in free text. Scan up to `SYNTH_SCAN_DEPTH` words on
/// each side of the separator for resolvable language phrases (longest span
/// first, fuzzy off) and wrap the match in a synthesized bracket.
fn synthesize_bracket(title: &str, catalog: &Catalog) -> Option<String> {
    let words: Vec<&str> = title.split_whitespace().collect();

    for (index, word) in words.iter().enumerate() {
        let is_arrow = *word == ">" || *word == "<";
        let is_to = word.eq_ignore_ascii_case("to");
        if !is_arrow && !is_to {
            continue;
        }
        if index == 0 || index + 1 >= words.len() {
            continue;
        }

        let Some(left) = longest_resolvable(catalog, &words[..index], true) else {
            continue;
        };
        let Some(right) = longest_resolvable(catalog, &words[index + 1..], false) else {
            continue;
        };

        let (source_span, target_span) = if *word == "<" {
            (right.clone(), left.clone())
        } else {
            (left.clone(), right.clone())
        };

        let remainder: Vec<&str> = words[..index - left.word_count]
            .iter()
            .chain(words[index + 1 + right.word_count..].iter())
            .copied()
            .collect();

        let mut rebuilt = format!("[{} > {}]", source_span.text, target_span.text);
        if !remainder.is_empty() {
            rebuilt.push(' ');
            rebuilt.push_str(&remainder.join(" "));
        }
        return Some(rebuilt);
    }

    None
}

#[derive(Clone)]
struct ResolvedSpan {
    text: String,
    word_count: usize,
}

/// Longest phrase of up to `SYNTH_SCAN_DEPTH` words, anchored at the end
/// (`from_end`) or start of the slice, that resolves without fuzzy help.
fn longest_resolvable(catalog: &Catalog, words: &[&str], from_end: bool) -> Option<ResolvedSpan> {
    let max_len = words.len().min(SYNTH_SCAN_DEPTH);
    for len in (1..=max_len).rev() {
        let span: &[&str] = if from_end {
            &words[words.len() - len..]
        } else {
            &words[..len]
        };
        // A span is a run of language words; a bare separator token ends it.
        if span.iter().any(|w| !w.chars().any(char::is_alphanumeric)) {
            continue;
        }
        let phrase = span
            .join(" ")
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        if phrase.is_empty() {
            continue;
        }
        if catalog.resolve_with(&phrase, false).is_some() {
            return Some(ResolvedSpan {
                text: phrase,
                word_count: len,
            });
        }
    }
    None
}

/// A bracketed tag buried mid-title moves to the front.
fn relocate_bracket(title: &str) -> String {
    let Some(captures) = MID_BRACKET.captures(title) else {
        return title.to_string();
    };
    let before = captures.get(1).map_or("", |m| m.as_str()).trim();
    let content = captures.get(2).map_or("", |m| m.as_str()).trim();
    let after = captures.get(3).map_or("", |m| m.as_str()).trim();

    if before.is_empty() {
        return title.to_string();
    }

    let mut rebuilt = format!("[{}] {}", content, before);
    if !after.is_empty() {
        rebuilt.push(' ');
        rebuilt.push_str(after);
    }
    rebuilt
}

fn collapse(title: &str) -> String {
    let collapsed = REPEATED_ARROWS.replace_all(title, " > ");
    let collapsed = REPEATED_SPACES.replace_all(&collapsed, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        let catalog = Catalog::core();
        match preclean(raw, &catalog) {
            CleanOutcome::Cleaned(title) => title,
            CleanOutcome::Unresolvable(_) => panic!("unexpectedly unresolvable: {}", raw),
        }
    }

    #[test]
    fn test_glyph_normalization() {
        assert_eq!(
            clean("【German ＞ English】 old letter"),
            "[German > English] old letter"
        );
    }

    #[test]
    fn test_crosspost_marker_stripped() {
        assert_eq!(
            clean("[German > English] a letter (x-post from r/genealogy)"),
            "[German > English] a letter"
        );
    }

    #[test]
    fn test_canonical_misspelling_normalized() {
        assert_eq!(
            clean("[German > Enlgish] a letter"),
            "[German > English] a letter"
        );
    }

    #[test]
    fn test_bracket_synthesis() {
        assert_eq!(clean("Korean to Spanish - menu"), "[Korean > Spanish] - menu");
        assert_eq!(
            clean("japanese > english, what is this"),
            "[japanese > english] what is this"
        );
    }

    #[test]
    fn test_no_synthesis_without_languages() {
        // "to" with no resolvable neighbors stays untouched
        assert_eq!(clean("I want to learn something"), "I want to learn something");
    }

    #[test]
    fn test_reversed_arrow_synthesis_swaps() {
        assert_eq!(clean("English < German old letter"), "[German > English] old letter");
    }

    #[test]
    fn test_mid_title_bracket_relocated() {
        assert_eq!(
            clean("Please help [German > English] with this"),
            "[German > English] Please help with this"
        );
    }

    #[test]
    fn test_repeated_separators_collapse() {
        assert_eq!(clean("[German >> English]   letter"), "[German > English] letter");
    }

    #[test]
    fn test_unresolvable_placeholder() {
        let catalog = Catalog::core();
        assert!(matches!(
            preclean("[??] no idea what this is", &catalog),
            CleanOutcome::Unresolvable(_)
        ));
    }
}
