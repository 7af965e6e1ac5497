//! Staged resolution of free text to a language descriptor
//!
//! Resolution tries cheap exact stages first and only then the corrective
//! ones (misspelling table, deprecated codes, fuzzy matching). The first
//! stage that produces a descriptor wins. Unrecognized input is `None`,
//! never an error.

use icu_locale::subtags::{Region, Script};
use tracing::debug;

use crate::catalog::{Catalog, Descriptor, fuzzy, tables};

/// Minimum token-set score for a fuzzy hit against a supported name.
pub const FUZZY_THRESHOLD: u32 = 75;

impl Catalog {
    /// Resolve free text to a descriptor, with fuzzy matching enabled.
    pub fn resolve(&self, text: &str) -> Option<Descriptor> {
        self.resolve_with(text, true)
    }

    /// Resolve free text to a descriptor.
    ///
    /// Input shorter than 2 characters after normalization never resolves.
    /// The returned descriptor is an independent copy; lookups without an
    /// explicit region qualifier carry no country annotation.
    pub fn resolve_with(&self, text: &str, fuzzy_enabled: bool) -> Option<Descriptor> {
        let query = normalize(text);
        if query.chars().count() < 2 {
            return None;
        }

        // Compound codes ("zh-CN", "unknown-cyrl") short-circuit everything.
        if let Some(descriptor) = self.resolve_compound(&query) {
            return Some(descriptor);
        }

        // Exact canonical or alternate name.
        if let Some(index) = self.index_by_name(&query) {
            return Some(self.copy_without_country(index));
        }

        // 2-letter code, then 3-letter code. A 3-letter hit lands on the
        // same entity row as its 2-letter sibling, so the preferred code
        // stays the 2-letter one.
        if let Some(index) = self.index_by_code_2(&query) {
            return Some(self.copy_without_country(index));
        }
        if let Some(index) = self.index_by_code_3(&query) {
            return Some(self.copy_without_country(index));
        }

        // Deep lookup for languages not held in memory.
        if let Some(entry) = self.extended_entry(&query) {
            return Some(entry.to_descriptor(&query));
        }

        // Misspellings/abbreviations, then withdrawn codes. Both redirect
        // to a query that resolves exactly, so fuzzy stays off.
        if let Some(corrected) = tables::correct_misspelling(&query) {
            return self.resolve_with(corrected, false);
        }
        if let Some(current) = tables::deprecated_code(&query) {
            return self.resolve_with(current, false);
        }

        if fuzzy_enabled && !tables::is_fuzzy_ignored(&query) {
            if let Some(name) = self.best_supported_match(&query) {
                debug!(query = %query, matched = %name, "fuzzy language match");
                return self.resolve_with(&name, false);
            }
        }

        // Exactly 4 characters may be a bare ISO 15924 script code.
        if query.chars().count() == 4 {
            if let Some(descriptor) = resolve_script(&query) {
                return Some(descriptor);
            }
        }

        None
    }

    /// Resolve a delimited list of language references.
    ///
    /// Accepts `, + newline / : ;` as delimiters and an optional
    /// `LANGUAGES:` prefix. Reserved platform tokens are skipped silently.
    /// The result is deduplicated by preferred code and sorted by code.
    pub fn resolve_list(&self, text: &str) -> Vec<Descriptor> {
        let mut body = text.trim();
        if let Some(rest) = strip_prefix_ci(body, "languages:") {
            body = rest.trim_start();
        }

        let mut resolved: Vec<Descriptor> = Vec::new();
        for token in body.split([',', '+', '\n', '/', ':', ';']) {
            let token = token.trim();
            if token.is_empty() || tables::is_reserved_token(&token.to_lowercase()) {
                continue;
            }
            if let Some(descriptor) = self.resolve(token) {
                if !resolved.contains(&descriptor) {
                    resolved.push(descriptor);
                }
            }
        }
        resolved.sort_by_key(|d| d.preferred_code());
        resolved
    }

    /// `<lang>-<qualifier>`: the qualifier is either a script code (the
    /// whole compound names an unknown language in a known script) or a
    /// region code (the compound names a country-flavored language).
    fn resolve_compound(&self, query: &str) -> Option<Descriptor> {
        let (base, qualifier) = query.split_once('-')?;
        if base.is_empty() || qualifier.is_empty() {
            return None;
        }

        if Script::try_from_str(qualifier).is_ok() {
            if let Some(descriptor) = resolve_script(qualifier) {
                return Some(descriptor);
            }
        }

        if Region::try_from_str(qualifier).is_ok() {
            let region = qualifier.to_uppercase();
            if let Some(country) = tables::country_name(&region) {
                let base_descriptor = self.resolve_with(base, false)?;
                return Some(base_descriptor.with_country(country));
            }
        }

        None
    }

    /// Best token-set match of the query against every supported name and
    /// its alternates. Returns the matched entity's canonical name.
    fn best_supported_match(&self, query: &str) -> Option<String> {
        let mut best: Option<(u32, &Descriptor)> = None;
        for descriptor in self.supported() {
            let mut score = fuzzy::token_set_ratio(query, &descriptor.name);
            for alternate in &descriptor.alternate_names {
                score = score.max(fuzzy::token_set_ratio(query, alternate));
            }
            if score >= FUZZY_THRESHOLD && best.is_none_or(|(s, _)| score > s) {
                best = Some((score, descriptor));
            }
        }
        best.map(|(_, descriptor)| descriptor.name.to_lowercase())
    }

    fn copy_without_country(&self, index: usize) -> Descriptor {
        let mut descriptor = self.descriptor(index).clone();
        descriptor.country = None;
        descriptor
    }
}

fn resolve_script(code: &str) -> Option<Descriptor> {
    let mut title_cased = String::with_capacity(code.len());
    for (i, c) in code.chars().enumerate() {
        if i == 0 {
            title_cased.extend(c.to_uppercase());
        } else {
            title_cased.extend(c.to_lowercase());
        }
    }
    let name = tables::script_name(&title_cased)?;
    Some(Descriptor::for_script(&title_cased, name))
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&text[prefix.len()..]),
        _ => None,
    }
}
