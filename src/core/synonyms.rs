//! Ordered synonym tables used for keyword detection.
//!
//! A table is a list, not a map: the position of an entry is its priority
//! when a message matches synonyms from more than one category.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SynonymError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    pub fn new(canonical: &str, synonyms: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True if any synonym occurs in `lowered`. The caller lowercases.
    pub fn matches(&self, lowered: &str) -> bool {
        self.synonyms
            .iter()
            .any(|s| !s.is_empty() && lowered.contains(s.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First-match-wins scan in declaration order.
    pub fn first_match(&self, lowered: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(lowered))
            .map(|entry| entry.canonical.as_str())
    }

    fn validate(&self, table: &'static str) -> Result<(), SynonymError> {
        for entry in &self.entries {
            if entry.canonical.trim().is_empty() {
                return Err(SynonymError::EmptyCanonical { table });
            }
            if entry.synonyms.is_empty() {
                return Err(SynonymError::NoSynonyms {
                    table,
                    canonical: entry.canonical.clone(),
                });
            }
            if entry.synonyms.iter().any(|s| s.is_empty()) {
                return Err(SynonymError::EmptySynonym {
                    table,
                    canonical: entry.canonical.clone(),
                });
            }
        }
        Ok(())
    }

    // Synonyms are compared against a lowercased message, so they must be
    // lowercase too.
    fn normalize(&mut self) {
        for entry in &mut self.entries {
            for synonym in &mut entry.synonyms {
                *synonym = synonym.to_lowercase();
            }
        }
    }
}

/// The two tables the extractor scans.
///
/// On disk this is TOML with `[[services]]` and `[[cities]]` arrays of
/// tables; file order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymCatalog {
    pub services: SynonymTable,
    pub cities: SynonymTable,
}

impl Default for SynonymCatalog {
    fn default() -> Self {
        Self {
            services: SynonymTable::new(vec![
                SynonymEntry::new("passport", &["passport", "passports", "passport application"]),
                SynonymEntry::new(
                    "driving license",
                    &["driving license", "driving licence", "driver license", "dl", "driving", "driver"],
                ),
                SynonymEntry::new("pan card", &["pan card", "pan"]),
                SynonymEntry::new("voter id", &["voter id", "vote"]),
            ]),
            cities: SynonymTable::new(vec![
                SynonymEntry::new("chennai", &["chennai", "madras"]),
                SynonymEntry::new("mumbai", &["mumbai", "bombay"]),
                SynonymEntry::new("delhi", &["delhi", "new delhi"]),
                SynonymEntry::new("kolkata", &["kolkata", "calcutta"]),
                SynonymEntry::new("bangalore", &["bangalore", "bengaluru"]),
            ]),
        }
    }
}

impl SynonymCatalog {
    pub fn from_toml_str(raw: &str) -> Result<Self, SynonymError> {
        let mut catalog: SynonymCatalog = toml::from_str(raw)?;
        catalog.services.validate("services")?;
        catalog.cities.validate("cities")?;
        catalog.services.normalize();
        catalog.cities.normalize();
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, SynonymError> {
        let raw = fs::read_to_string(path).map_err(|source| SynonymError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
