//! Token-set similarity scoring for inexact language-name lookups
//!
//! Scores are on a 0–100 scale where 100 is an exact match after
//! normalization. The resolver compares user-typed text against every
//! supported language name with `token_set_ratio`, which is insensitive to
//! word order and to extra tokens shared by both inputs, so
//! "chinese simplified" and "Simplified Chinese" score 100.

use std::collections::BTreeSet;

/// Classic two-row dynamic-programming Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars = a.chars().collect::<Vec<_>>();
    let b_chars = b.chars().collect::<Vec<_>>();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }
    let mut prev = (0..=b_chars.len()).collect::<Vec<_>>();
    let mut curr = vec![0usize; b_chars.len() + 1];
    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + cost;
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}

/// Plain similarity ratio: 100 minus the normalized edit distance.
pub fn ratio(a: &str, b: &str) -> u32 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    (100 * (longest - distance.min(longest)) / longest) as u32
}

/// Word-order-insensitive similarity between two phrases.
///
/// Both inputs are lowercased and split into token sets. The score is the
/// best plain ratio between the sorted shared tokens, and the shared tokens
/// joined with each side's leftovers, which rewards one input being a
/// reordered subset of the other.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let tokens_a: BTreeSet<String> = tokenize(a);
    let tokens_b: BTreeSet<String> = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let shared: Vec<&String> = tokens_a.intersection(&tokens_b).collect();
    let only_a: Vec<&String> = tokens_a.difference(&tokens_b).collect();
    let only_b: Vec<&String> = tokens_b.difference(&tokens_a).collect();

    let joined_shared = join(&shared);
    let joined_a = join_two(&shared, &only_a);
    let joined_b = join_two(&shared, &only_b);

    ratio(&joined_shared, &joined_a)
        .max(ratio(&joined_shared, &joined_b))
        .max(ratio(&joined_a, &joined_b))
}

fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

fn join(tokens: &[&String]) -> String {
    tokens
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_two(head: &[&String], tail: &[&String]) -> String {
    let mut parts: Vec<&str> = head.iter().map(|t| t.as_str()).collect();
    parts.extend(tail.iter().map(|t| t.as_str()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn test_ratio_exact_and_empty() {
        assert_eq!(ratio("german", "german"), 100);
        assert_eq!(ratio("", ""), 100);
        assert!(ratio("german", "germna") >= 60);
    }

    #[test]
    fn test_token_set_ignores_word_order() {
        assert_eq!(
            token_set_ratio("simplified chinese", "Chinese Simplified"),
            100
        );
    }

    #[test]
    fn test_token_set_subset_scores_high() {
        assert_eq!(token_set_ratio("chinese", "chinese mandarin"), 100);
    }

    #[test]
    fn test_token_set_misspelling_scores_above_threshold() {
        assert!(token_set_ratio("portugese", "Portuguese") >= 75);
        assert!(token_set_ratio("japanese", "Javanese") < 90);
    }

    #[test]
    fn test_token_set_unrelated_scores_low() {
        assert!(token_set_ratio("need help with a letter", "Latin") < 60);
    }
}
