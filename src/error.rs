use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum SynonymError {
    #[error("failed to read synonym file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse synonym file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{table} table has an entry with an empty canonical name")]
    EmptyCanonical { table: &'static str },

    #[error("{table} entry '{canonical}' has no synonyms")]
    NoSynonyms {
        table: &'static str,
        canonical: String,
    },

    #[error("{table} entry '{canonical}' has an empty synonym")]
    EmptySynonym {
        table: &'static str,
        canonical: String,
    },
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("directory returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("message send failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("messaging API error {status}: {body}")]
    Api { status: u16, body: String },
}

/// Faults the webhook cannot turn into a reply. Always a 500.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("inbound webhook is missing field {0}")]
    MissingField(&'static str),

    #[error("malformed webhook body: {0}")]
    Malformed(#[from] axum::extract::rejection::FormRejection),

    #[error(transparent)]
    Send(#[from] SendError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::error!("Webhook error: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
