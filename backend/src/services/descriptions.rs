//! Day-sign and tone descriptions loaded from a JSON resource.
//!
//! The resource has two namespaces:
//!
//! ```json
//! {
//!   "day_signs": { "Imix": "...", "Ik": "..." },
//!   "tones": { "1": "...", "13": "..." }
//! }
//! ```
//!
//! Loading never fails: a missing or unreadable file yields an empty table and
//! every lookup then returns [`DESCRIPTION_NOT_FOUND`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::models::{DaySign, Tone};

/// Returned for any day-sign or tone absent from the table.
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found.";

/// Read-only description lookup shared by all requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionTable {
    #[serde(default)]
    day_signs: HashMap<String, String>,
    /// Keyed by the tone number rendered as a string ("1".."13").
    #[serde(default)]
    tones: HashMap<String, String>,
}

impl DescriptionTable {
    /// An empty table; all lookups fall back to the sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load the table from `path`, substituting an empty table on any failure.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Descriptions file {} unavailable ({}), using empty table",
                    path.display(),
                    e
                );
                return Self::empty();
            }
        };

        match Self::from_json_str(&content) {
            Ok(table) => {
                info!(
                    day_signs = table.day_signs.len(),
                    tones = table.tones.len(),
                    "Loaded descriptions from {}",
                    path.display()
                );
                table
            }
            Err(e) => {
                warn!(
                    "Descriptions file {} is not valid JSON ({}), using empty table",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// Insert or replace a day-sign description.
    pub fn with_day_sign(mut self, sign: DaySign, text: impl Into<String>) -> Self {
        self.day_signs.insert(sign.name().to_string(), text.into());
        self
    }

    /// Insert or replace a tone description.
    pub fn with_tone(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.tones.insert(tone.to_string(), text.into());
        self
    }

    pub fn day_sign(&self, sign: DaySign) -> &str {
        self.day_signs
            .get(sign.name())
            .map(String::as_str)
            .unwrap_or(DESCRIPTION_NOT_FOUND)
    }

    pub fn tone(&self, tone: Tone) -> &str {
        self.tones
            .get(&tone.to_string())
            .map(String::as_str)
            .unwrap_or(DESCRIPTION_NOT_FOUND)
    }

    pub fn is_empty(&self) -> bool {
        self.day_signs.is_empty() && self.tones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_returns_sentinel() {
        let table = DescriptionTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.day_sign(DaySign::Imix), DESCRIPTION_NOT_FOUND);
        assert_eq!(table.tone(Tone::MIN), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_parse_partial_json() {
        let json = r#"{ "day_signs": { "Ahau": "Sun. Enlightenment." }, "tones": { "11": "Spectral." } }"#;
        let table = DescriptionTable::from_json_str(json).unwrap();
        assert_eq!(table.day_sign(DaySign::Ahau), "Sun. Enlightenment.");
        assert_eq!(table.day_sign(DaySign::Imix), DESCRIPTION_NOT_FOUND);
        assert_eq!(table.tone(Tone::new(11).unwrap()), "Spectral.");
        assert_eq!(table.tone(Tone::new(12).unwrap()), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_missing_namespace_defaults_to_empty() {
        let table = DescriptionTable::from_json_str(r#"{ "tones": { "1": "Magnetic." } }"#).unwrap();
        assert_eq!(table.tone(Tone::MIN), "Magnetic.");
        assert_eq!(table.day_sign(DaySign::Kan), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn test_load_missing_file_yields_empty_table() {
        let table = DescriptionTable::load_or_empty("/definitely/not/here/descriptions.json");
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_invalid_json_yields_empty_table() {
        let path = std::env::temp_dir().join(format!(
            "tzolkin_invalid_descriptions_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let table = DescriptionTable::load_or_empty(&path);
        let _ = fs::remove_file(&path);
        assert!(table.is_empty());
    }

    #[test]
    fn test_builders() {
        let table = DescriptionTable::empty()
            .with_day_sign(DaySign::Ix, "Jaguar.")
            .with_tone(Tone::new(4).unwrap(), "Self-existing.");
        assert_eq!(table.day_sign(DaySign::Ix), "Jaguar.");
        assert_eq!(table.tone(Tone::new(4).unwrap()), "Self-existing.");
    }
}
