//! In-process fakes for the directory and sender seams.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::core::{AppState, QueryExtractor};
use crate::directory::{InMemoryDirectory, OfficeDirectory, OfficeRecord};
use crate::error::{DirectoryError, SendError};
use crate::io::MessageSender;

#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, to: &str, text: &str) -> Result<(), SendError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((to.to_string(), text.to_string()));
        }
        Ok(())
    }
}

pub struct FailingSender;

#[async_trait]
impl MessageSender for FailingSender {
    async fn send_message(&self, _to: &str, _text: &str) -> Result<(), SendError> {
        Err(SendError::Api {
            status: 401,
            body: "authenticate".to_string(),
        })
    }
}

pub struct FailingDirectory;

#[async_trait]
impl OfficeDirectory for FailingDirectory {
    async fn find_offices(&self, _service_type: &str, _city: &str) -> Result<Vec<OfficeRecord>, DirectoryError> {
        Err(DirectoryError::Status {
            status: 503,
            body: "upstream unavailable".to_string(),
        })
    }
}

pub fn state_with(records: Vec<OfficeRecord>, sender: Arc<dyn MessageSender>) -> AppState {
    AppState::new(
        QueryExtractor::default(),
        Arc::new(InMemoryDirectory::new(records)),
        sender,
    )
}
