use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use super::MessageSender;
use crate::error::SendError;

/// The parts of a created Message resource we log.
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    #[serde(default)]
    status: Option<String>,
}

pub struct TwilioClient {
    api_base: String,
    account_sid: String,
    auth_token: String,
    from: String,
    client: Client,
}

impl TwilioClient {
    pub fn new(api_base: &str, account_sid: String, auth_token: String, from: String) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
            from,
            client: Client::new(),
        }
    }

    fn create_message_request(&self, to: &str, text: &str) -> RequestBuilder {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        );
        self.client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", self.from.as_str()), ("To", to), ("Body", text)])
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    async fn send_message(&self, to: &str, text: &str) -> Result<(), SendError> {
        let res = self.create_message_request(to, text).send().await?;
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<MessageResource>(&body) {
            Ok(msg) => tracing::debug!(
                "Queued message {} to {} ({})",
                msg.sid,
                to,
                msg.status.as_deref().unwrap_or("unknown")
            ),
            Err(_) => tracing::debug!("Queued message to {}", to),
        }
        Ok(())
    }
}
