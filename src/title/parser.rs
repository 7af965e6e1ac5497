//! Chunk extraction, chunk resolution, direction classification, and the
//! AI fallback hook
//!
//! After pre-cleaning, a title has the shape `[source SEP target] free
//! text`. The source chunk is resolved as one phrase; the target chunk may
//! list several languages separated by commas. Direction is classified by
//! where the canonical language appears, and a title that yields nothing
//! beyond the canonical language is handed to the external classifier.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{Catalog, Descriptor, tables};
use crate::classify::TitleClassifier;
use crate::title::cleaner::{self, CleanOutcome};
use crate::title::flair;
use crate::title::{Direction, ParseResult};

/// Classifier answers below this confidence are discarded.
pub const AI_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// How many words of a phrase are tried individually when the phrase as a
/// whole does not resolve.
const CHUNK_SCAN_DEPTH: usize = 5;

/// Combined distinct-language count at which a canonical mention on both
/// sides is treated as incidental and dropped from the fuller side.
const BOTH_SIDES_DROP_THRESHOLD: usize = 3;

/// Title parser over an injected read-only catalog.
pub struct TitleParser<'a> {
    catalog: &'a Catalog,
    classifier: Option<&'a dyn TitleClassifier>,
}

impl<'a> TitleParser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        TitleParser {
            catalog,
            classifier: None,
        }
    }

    /// Attach the fallback classifier consulted for titles that resolve to
    /// nothing beyond the canonical language.
    pub fn with_classifier(mut self, classifier: &'a dyn TitleClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Parse a raw title into a [`ParseResult`]. Never fails; unrecoverable
    /// input yields the sentinel empty result.
    pub async fn parse(&self, raw_title: &str, attachment: Option<&str>) -> ParseResult {
        let cleaned = match cleaner::preclean(raw_title, self.catalog) {
            CleanOutcome::Cleaned(title) => title,
            CleanOutcome::Unresolvable(title) => return ParseResult::sentinel(title),
        };

        let (source_chunk, target_chunk) = extract_chunks(&cleaned);

        let mut source = self.resolve_phrase(&strip_decorations(&source_chunk, false));
        let mut target = Vec::new();
        for phrase in strip_decorations(&target_chunk, true).split(',') {
            for descriptor in self.resolve_phrase(phrase) {
                push_unique(&mut target, descriptor);
            }
        }

        let mut direction = self.classify_direction(&mut source, &mut target);
        let mut notify = self.derive_notify(&source, &target, direction);

        let mut ai_assessed = false;
        if self.only_canonical(&source, &target) {
            if let Some(classifier) = self.classifier {
                match classifier.classify(&cleaned, attachment).await {
                    Ok(answer) if answer.confidence >= AI_CONFIDENCE_THRESHOLD => {
                        debug!(
                            provider = classifier.provider_name(),
                            source = %answer.source_code,
                            target = %answer.target_code,
                            confidence = answer.confidence,
                            "classifier overrode title languages"
                        );
                        source = self.resolve_codes(&answer.source_code);
                        target = self.resolve_codes(&answer.target_code);
                        direction = self.classify_direction(&mut source, &mut target);
                        notify = self.derive_notify(&source, &target, direction);
                        ai_assessed = true;
                    }
                    Ok(answer) => {
                        debug!(
                            confidence = answer.confidence,
                            "classifier answer below confidence cutoff, keeping title parse"
                        );
                    }
                    Err(error) => {
                        debug!(%error, "classifier unavailable, keeping title parse");
                    }
                }
            }
        }

        let country = source
            .iter()
            .chain(target.iter())
            .find_map(|d| d.country.clone());

        let (flair_code, flair_text) = flair::derive(&source, &target, direction);

        ParseResult {
            source,
            target,
            direction,
            cleaned_title: cleaned,
            flair_code,
            flair_text,
            notify,
            country,
            ai_assessed,
        }
    }

    /// Resolve one phrase: the whole phrase first (multi-word names), then
    /// its first few words individually with short stopwords dropped.
    fn resolve_phrase(&self, phrase: &str) -> Vec<Descriptor> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Vec::new();
        }

        if let Some(descriptor) = self.catalog.resolve(phrase) {
            return vec![descriptor];
        }

        let mut resolved = Vec::new();
        for word in phrase.split_whitespace().take(CHUNK_SCAN_DEPTH) {
            let word: String = word
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect();
            if word.is_empty() || tables::is_code_stopword(&word.to_lowercase()) {
                continue;
            }
            if let Some(descriptor) = self.catalog.resolve(&word) {
                push_unique(&mut resolved, descriptor);
            }
        }
        resolved
    }

    fn resolve_codes(&self, code: &str) -> Vec<Descriptor> {
        self.catalog
            .resolve_with(code, false)
            .into_iter()
            .collect()
    }

    /// Classify direction from where the canonical language sits. A
    /// canonical mention on both sides of a many-language title is usually
    /// incidental ("Middle English" glosses, comparison requests), so it is
    /// dropped from whichever side lists more than one language.
    fn classify_direction(
        &self,
        source: &mut Vec<Descriptor>,
        target: &mut Vec<Descriptor>,
    ) -> Direction {
        let canonical = self.catalog.canonical_code();

        if contains_code(source, &canonical) && contains_code(target, &canonical) {
            let distinct: HashSet<String> = source
                .iter()
                .chain(target.iter())
                .map(|d| d.preferred_code())
                .collect();
            if distinct.len() >= BOTH_SIDES_DROP_THRESHOLD {
                if target.len() > 1 {
                    target.retain(|d| d.preferred_code() != canonical);
                } else if source.len() > 1 {
                    source.retain(|d| d.preferred_code() != canonical);
                }
            }
        }

        match (
            contains_code(source, &canonical),
            contains_code(target, &canonical),
        ) {
            (true, true) => Direction::Both,
            (false, true) => Direction::ToCanonical,
            (true, false) => Direction::FromCanonical,
            (false, false) => Direction::Neither,
        }
    }

    /// Languages whose subscribers get notified: everything mentioned except
    /// the canonical language. A both-directions title targets nobody.
    fn derive_notify(
        &self,
        source: &[Descriptor],
        target: &[Descriptor],
        direction: Direction,
    ) -> Vec<Descriptor> {
        if direction == Direction::Both {
            return Vec::new();
        }
        let canonical = self.catalog.canonical_code();
        let mut notify = Vec::new();
        for descriptor in source.iter().chain(target.iter()) {
            if descriptor.preferred_code() != canonical {
                push_unique(&mut notify, descriptor.clone());
            }
        }
        notify
    }

    /// True when nothing was resolved beyond the canonical language, the
    /// condition for deferring to the classifier.
    fn only_canonical(&self, source: &[Descriptor], target: &[Descriptor]) -> bool {
        let canonical = self.catalog.canonical_code();
        source
            .iter()
            .chain(target.iter())
            .all(|d| d.preferred_code() == canonical)
    }
}

/// Split the cleaned title into source and target chunks on the first
/// matching separator. A `<` separator reads as a reversed arrow, so the
/// chunks swap. The target chunk ends at the closing bracket.
fn extract_chunks(cleaned: &str) -> (String, String) {
    let region = match (cleaned.find('['), cleaned.find(']')) {
        (Some(open), Some(close)) if close > open => &cleaned[open + 1..close],
        (Some(open), None) => &cleaned[open + 1..],
        _ => match cleaned.find(']') {
            Some(close) => &cleaned[..close],
            None => cleaned,
        },
    };

    if let Some((source, target)) = split_on_separator(region, ">") {
        return (source, target);
    }
    if let Some((source, target)) = split_on_separator_ci(region, " to ") {
        return (source, target);
    }
    // The dash needs surrounding spaces; a bare dash would split compound
    // codes like "zh-CN".
    if let Some((source, target)) = split_on_separator(region, " - ") {
        return (source, target);
    }
    if let Some((target, source)) = split_on_separator(region, "<") {
        return (source, target);
    }

    (region.to_string(), String::new())
}

fn split_on_separator(region: &str, separator: &str) -> Option<(String, String)> {
    let (left, right) = region.split_once(separator)?;
    Some((left.trim().to_string(), right.trim().to_string()))
}

fn split_on_separator_ci(region: &str, separator: &str) -> Option<(String, String)> {
    // The separator is ASCII and starts with a space, so a byte-window
    // match always lands on a char boundary.
    let bytes = region.as_bytes();
    let sep = separator.as_bytes();
    if bytes.len() < sep.len() {
        return None;
    }
    for i in 0..=bytes.len() - sep.len() {
        if bytes[i..i + sep.len()].eq_ignore_ascii_case(sep) {
            let left = &region[..i];
            let right = &region[i + sep.len()..];
            return Some((left.trim().to_string(), right.trim().to_string()));
        }
    }
    None
}

/// Remove decorative punctuation. Commas delimit multiple languages on the
/// target side, so they survive there.
fn strip_decorations(chunk: &str, keep_commas: bool) -> String {
    chunk
        .chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || *c == '-'
                || *c == '{'
                || *c == '}'
                || (keep_commas && *c == ',')
        })
        .collect()
}

fn contains_code(descriptors: &[Descriptor], code: &str) -> bool {
    descriptors.iter().any(|d| d.preferred_code() == code)
}

fn push_unique(list: &mut Vec<Descriptor>, descriptor: Descriptor) {
    if !list.contains(&descriptor) {
        list.push(descriptor);
    }
}
