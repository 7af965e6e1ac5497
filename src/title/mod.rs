//! Title Parser
//!
//! Turns a raw request title into a structured [`ParseResult`]: which
//! languages the post concerns, which direction the translation runs
//! relative to the canonical language, and the flair the post should wear.
//! Parsing never fails; input nothing can be made of yields the sentinel
//! empty result.
//!
//! # Example
//!
//! ```ignore
//! use babelmod::catalog::Catalog;
//! use babelmod::title::TitleParser;
//!
//! let catalog = Catalog::core();
//! let parser = TitleParser::new(&catalog);
//! let result = parser.parse("[German > English] Grandma's letter", None).await;
//! assert_eq!(result.source[0].name, "German");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Descriptor;

pub(crate) mod cleaner;
mod flair;
pub mod parser;

#[cfg(test)]
mod integration_tests;

pub use parser::{AI_CONFIDENCE_THRESHOLD, TitleParser};

/// Translation direction relative to the canonical language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Canonical language appears only on the target side
    ToCanonical,
    /// Canonical language appears only on the source side
    FromCanonical,
    /// Canonical language appears on both sides
    Both,
    /// Canonical language appears on neither side
    Neither,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToCanonical => "to-canonical",
            Direction::FromCanonical => "from-canonical",
            Direction::Both => "both",
            Direction::Neither => "neither",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured outcome of parsing one raw title.
///
/// Produced once per title and never mutated afterward; the request state
/// machine and the command handlers only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub source: Vec<Descriptor>,
    pub target: Vec<Descriptor>,
    pub direction: Direction,
    pub cleaned_title: String,
    pub flair_code: Option<String>,
    pub flair_text: Option<String>,
    /// Languages whose subscribers should be notified about this post
    pub notify: Vec<Descriptor>,
    /// Country qualifier carried over from a compound code in the title
    pub country: Option<String>,
    /// The external classifier supplied the language fields
    pub ai_assessed: bool,
}

impl ParseResult {
    /// The empty sentinel for unrecoverable titles.
    pub fn sentinel(cleaned_title: String) -> Self {
        ParseResult {
            source: Vec::new(),
            target: Vec::new(),
            direction: Direction::Neither,
            cleaned_title,
            flair_code: None,
            flair_text: None,
            notify: Vec::new(),
            country: None,
            ai_assessed: false,
        }
    }

    /// True when parsing produced no language information at all.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}
