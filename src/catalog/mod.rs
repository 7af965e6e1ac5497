//! Language Catalog and Resolver
//!
//! The catalog loads every recognized language/script descriptor once at
//! process start and is injected read-only into the title parser and the
//! request state machine. Resolution turns free text ("german", "deu",
//! "zh-CN", "Cyrl") into an independent [`Descriptor`] copy; annotating a
//! resolved descriptor never touches catalog state.
//!
//! # Example
//!
//! ```ignore
//! use babelmod::catalog::Catalog;
//!
//! let catalog = Catalog::core();
//! let german = catalog.resolve("german").unwrap();
//! assert_eq!(german.preferred_code(), "de");
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

mod data;
pub mod extended;
pub mod fuzzy;
mod resolver;
pub(crate) mod tables;

pub use extended::{ExtendedEntry, load_extended_table};

/// A resolved language or script record.
///
/// Identity is the derived preferred code, not the struct contents: two
/// descriptors compare equal and hash identically iff their preferred codes
/// match. All other fields are annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub alternate_names: Vec<String>,
    pub code_2: Option<String>,
    pub code_3: Option<String>,
    pub script_code: Option<String>,
    pub country: Option<String>,
    pub family: Option<String>,
    pub population: Option<u64>,
    /// A dedicated platform category exists for this language.
    pub supported: bool,
    pub monthly_rate: Option<f64>,
    pub search_rate: Option<f64>,
}

impl Descriptor {
    /// The canonical identifier: 2-letter code if present, else 3-letter
    /// code, else lowercased script code, else `"unknown"`.
    pub fn preferred_code(&self) -> String {
        if let Some(code) = &self.code_2 {
            return code.clone();
        }
        if let Some(code) = &self.code_3 {
            return code.clone();
        }
        if let Some(script) = &self.script_code {
            return script.to_lowercase();
        }
        "unknown".to_string()
    }

    /// Descriptor for a bare script, used for `unknown-<script>` compounds
    /// and 4-character script-code lookups.
    pub fn for_script(code: &str, name: &str) -> Self {
        // Title-case the ISO 15924 code: "cyrl" -> "Cyrl".
        let mut script = String::with_capacity(code.len());
        for (i, c) in code.chars().enumerate() {
            if i == 0 {
                script.extend(c.to_uppercase());
            } else {
                script.extend(c.to_lowercase());
            }
        }
        Descriptor {
            name: format!("{} (Script)", name),
            alternate_names: Vec::new(),
            code_2: None,
            code_3: None,
            script_code: Some(script),
            country: None,
            family: None,
            population: None,
            supported: false,
            monthly_rate: None,
            search_rate: None,
        }
    }

    /// Annotate this descriptor with a resolved country, appending the
    /// braced country qualifier to the display name.
    pub(crate) fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self.name = format!("{} {{{}}}", self.name, country);
        self
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.preferred_code() == other.preferred_code()
    }
}

impl Eq for Descriptor {}

impl std::hash::Hash for Descriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.preferred_code().hash(state);
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.preferred_code())
    }
}

/// Process-wide read-only language catalog.
pub struct Catalog {
    descriptors: Vec<Descriptor>,
    by_name: HashMap<String, usize>,
    by_code_2: HashMap<String, usize>,
    by_code_3: HashMap<String, usize>,
    extended: HashMap<String, ExtendedEntry>,
    canonical: usize,
}

impl Catalog {
    /// Build the catalog from the embedded core table. English is the
    /// canonical language direction is measured against.
    pub fn core() -> Self {
        let descriptors: Vec<Descriptor> = data::LANGUAGES
            .iter()
            .map(|record| Descriptor {
                name: record.name.to_string(),
                alternate_names: record
                    .alternates
                    .iter()
                    .map(|a| a.to_string())
                    .collect(),
                code_2: non_empty(record.code_2),
                code_3: non_empty(record.code_3),
                script_code: non_empty(record.script),
                country: non_empty(record.country),
                family: non_empty(record.family),
                population: (record.population > 0).then_some(record.population),
                supported: record.supported,
                monthly_rate: (record.monthly_rate > 0.0).then_some(record.monthly_rate),
                search_rate: (record.search_rate > 0.0).then_some(record.search_rate),
            })
            .collect();

        let mut by_name = HashMap::new();
        let mut by_code_2 = HashMap::new();
        let mut by_code_3 = HashMap::new();
        let mut canonical = 0;
        for (index, descriptor) in descriptors.iter().enumerate() {
            by_name.insert(descriptor.name.to_lowercase(), index);
            for alternate in &descriptor.alternate_names {
                by_name.entry(alternate.to_lowercase()).or_insert(index);
            }
            if let Some(code) = &descriptor.code_2 {
                by_code_2.insert(code.clone(), index);
                if code == "en" {
                    canonical = index;
                }
            }
            if let Some(code) = &descriptor.code_3 {
                by_code_3.insert(code.clone(), index);
            }
        }

        Catalog {
            descriptors,
            by_name,
            by_code_2,
            by_code_3,
            extended: HashMap::new(),
            canonical,
        }
    }

    /// Build the core catalog and attach the on-disk auxiliary table used
    /// for deep lookups of languages not held in memory.
    pub fn with_extended_table(path: &Path) -> Result<Self, String> {
        let mut catalog = Self::core();
        catalog.extended = load_extended_table(path)?;
        Ok(catalog)
    }

    /// The canonical language (English in the core table).
    pub fn canonical(&self) -> &Descriptor {
        &self.descriptors[self.canonical]
    }

    pub fn canonical_code(&self) -> String {
        self.canonical().preferred_code()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub(crate) fn descriptor(&self, index: usize) -> &Descriptor {
        &self.descriptors[index]
    }

    pub(crate) fn index_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn index_by_code_2(&self, code: &str) -> Option<usize> {
        self.by_code_2.get(code).copied()
    }

    pub(crate) fn index_by_code_3(&self, code: &str) -> Option<usize> {
        self.by_code_3.get(code).copied()
    }

    pub(crate) fn extended_entry(&self, code: &str) -> Option<&ExtendedEntry> {
        self.extended.get(code)
    }

    /// Every supported language, the fuzzy-match universe.
    pub(crate) fn supported(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter().filter(|d| d.supported)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_catalog_loads() {
        let catalog = Catalog::core();
        assert!(catalog.len() > 50);
        assert_eq!(catalog.canonical().name, "English");
        assert_eq!(catalog.canonical_code(), "en");
    }

    #[test]
    fn test_preferred_code_priority() {
        let catalog = Catalog::core();
        let german = catalog.resolve("German").unwrap();
        assert_eq!(german.preferred_code(), "de");

        // 3-letter only
        let cantonese = catalog.resolve("Yue").unwrap();
        assert_eq!(cantonese.preferred_code(), "yue");

        // No codes at all falls through to the sentinel
        let unknown = catalog.resolve("Unknown").unwrap();
        assert_eq!(unknown.preferred_code(), "unknown");

        // Script-only descriptor
        let script = Descriptor::for_script("Cyrl", "Cyrillic");
        assert_eq!(script.preferred_code(), "cyrl");
    }

    #[test]
    fn test_descriptor_identity_is_preferred_code() {
        let catalog = Catalog::core();
        let a = catalog.resolve("german").unwrap();
        let mut b = catalog.resolve("deutsch").unwrap();
        b.country = Some("Austria".to_string());
        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
