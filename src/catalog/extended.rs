//! On-disk auxiliary language table
//!
//! The core table covers the languages that actually show up in requests;
//! everything else lives in a JSON file keyed by ISO 639-3 code that is
//! loaded once at catalog construction and consulted by the resolver's deep
//! lookup stage.
//!
//! The file has the following structure:
//! ```json
//! {
//!     "ain": { "name": "Ainu", "script": "Kana" },
//!     "chr": { "name": "Cherokee", "script": "Cher", "family": "Iroquoian" }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Descriptor;

/// One auxiliary-table row. Only the name is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEntry {
    pub name: String,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
}

impl ExtendedEntry {
    /// Materialize a full descriptor for this row under its 3-letter code.
    pub(crate) fn to_descriptor(&self, code_3: &str) -> Descriptor {
        Descriptor {
            name: self.name.clone(),
            alternate_names: Vec::new(),
            code_2: None,
            code_3: Some(code_3.to_string()),
            script_code: self.script.clone(),
            country: None,
            family: self.family.clone(),
            population: None,
            supported: false,
            monthly_rate: None,
            search_rate: None,
        }
    }
}

/// Load the auxiliary table from a JSON file.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object of entries
pub fn load_extended_table(path: &Path) -> Result<HashMap<String, ExtendedEntry>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

    let table: HashMap<String, ExtendedEntry> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse JSON from '{}': {}", path.display(), e))?;

    // Keys are 3-letter codes; anything else is a broken table, better to
    // reject at startup than to miss lookups silently later.
    for key in table.keys() {
        if key.len() != 3 || !key.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(format!(
                "Invalid language code '{}' in '{}': expected a lowercase 3-letter code",
                key,
                path.display()
            ));
        }
    }

    Ok(table)
}
