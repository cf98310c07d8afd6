pub mod supabase;

pub use supabase::SupabaseDirectory;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DirectoryError;

/// One row of the offices table. Read-only from our side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub office_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub timings: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub contact_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub website: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub map_link: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub service_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[async_trait]
pub trait OfficeDirectory: Send + Sync {
    /// Offices whose `service_type` and `city` equal the arguments exactly.
    async fn find_offices(&self, service_type: &str, city: &str) -> Result<Vec<OfficeRecord>, DirectoryError>;
}

/// Directory backed by a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: Vec<OfficeRecord>,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<OfficeRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl OfficeDirectory for InMemoryDirectory {
    async fn find_offices(&self, service_type: &str, city: &str) -> Result<Vec<OfficeRecord>, DirectoryError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.service_type == service_type && r.city == city)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_tolerates_nulls_and_extra_columns() -> anyhow::Result<()> {
        let row = json!({
            "id": 7,
            "office_name": "RTO Andheri",
            "address": null,
            "timings": "10-4",
            "service_type": "driving license",
            "city": "mumbai"
        });
        let record: OfficeRecord = serde_json::from_value(row)?;
        assert_eq!(record.office_name, "RTO Andheri");
        assert_eq!(record.address, "");
        assert_eq!(record.website, "");
        assert_eq!(record.city, "mumbai");
        Ok(())
    }

    #[tokio::test]
    async fn test_in_memory_exact_match() -> anyhow::Result<()> {
        let directory = InMemoryDirectory::new(vec![
            OfficeRecord {
                office_name: "PSK Chennai".to_string(),
                service_type: "passport".to_string(),
                city: "chennai".to_string(),
                ..Default::default()
            },
            OfficeRecord {
                office_name: "PSK Mumbai".to_string(),
                service_type: "passport".to_string(),
                city: "mumbai".to_string(),
                ..Default::default()
            },
        ]);

        let found = directory.find_offices("passport", "mumbai").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].office_name, "PSK Mumbai");

        assert!(directory.find_offices("passport", "Mumbai").await?.is_empty());
        Ok(())
    }
}
