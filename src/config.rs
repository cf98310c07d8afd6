use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_WHATSAPP_FROM: &str = "whatsapp:+14155238886"; // Twilio sandbox number
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";
pub const DEFAULT_OFFICES_TABLE: &str = "government_offices";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub offices_table: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from: String,
    pub twilio_api_base: String,
    pub synonyms_path: Option<PathBuf>,
    pub bind_addr: String,
    pub port: u16,
}

impl BotConfig {
    /// Reads the process environment. Call `dotenvy` first if a `.env`
    /// file should count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_KEY")?,
            offices_table: optional("OFFICES_TABLE", DEFAULT_OFFICES_TABLE),
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_from: optional("TWILIO_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_FROM),
            twilio_api_base: optional("TWILIO_API_BASE", DEFAULT_TWILIO_API_BASE),
            synonyms_path: lookup("SYNONYMS_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            port,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
