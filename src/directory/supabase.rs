//! PostgREST (Supabase) backed office lookup.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::{OfficeDirectory, OfficeRecord};
use crate::error::DirectoryError;

pub struct SupabaseDirectory {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl SupabaseDirectory {
    pub fn new(base_url: &str, api_key: String, table: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
            client: Client::new(),
        }
    }

    fn lookup_request(&self, service_type: &str, city: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, self.table);
        self.client
            .get(&url)
            .query(&[
                ("select", "*".to_string()),
                ("service_type", format!("eq.{}", service_type)),
                ("city", format!("eq.{}", city)),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl OfficeDirectory for SupabaseDirectory {
    async fn find_offices(&self, service_type: &str, city: &str) -> Result<Vec<OfficeRecord>, DirectoryError> {
        let res = self.lookup_request(service_type, city).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<OfficeRecord> = res.json().await?;
        tracing::debug!("Directory returned {} row(s) for {} / {}", records.len(), service_type, city);
        Ok(records)
    }
}
