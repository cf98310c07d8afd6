use serde::{Deserialize, Serialize};

use super::synonyms::SynonymCatalog;

/// Best-effort reading of a message. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub service_type: Option<String>,
    pub city: Option<String>,
}

impl ExtractionResult {
    /// Both halves, or nothing.
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (&self.service_type, &self.city) {
            (Some(service), Some(city)) => Some((service.as_str(), city.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryExtractor {
    catalog: SynonymCatalog,
}

impl QueryExtractor {
    pub fn new(catalog: SynonymCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SynonymCatalog {
        &self.catalog
    }

    /// Case-insensitive substring scan of both tables. Each table is scanned
    /// independently and the earliest declared category wins.
    pub fn extract(&self, message: &str) -> ExtractionResult {
        let lowered = message.to_lowercase();

        ExtractionResult {
            service_type: self.catalog.services.first_match(&lowered).map(str::to_string),
            city: self.catalog.cities.first_match(&lowered).map(str::to_string),
        }
    }
}
