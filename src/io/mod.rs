pub mod twilio;

pub use twilio::TwilioClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SendError;

/// Form fields of an inbound messaging webhook. Everything else the
/// platform posts is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "From")]
    pub from: Option<String>,
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, to: &str, text: &str) -> Result<(), SendError>;
}
