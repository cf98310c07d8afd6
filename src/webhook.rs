//! Inbound message handling: extract, look up, reply.

use crate::core::reply;
use crate::core::AppState;
use crate::error::WebhookError;
use crate::io::InboundMessage;

/// How a handled webhook ended. Every variant is acknowledged with 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Service or city (or both) missing; asked the sender to rephrase.
    Clarification,
    OfficeFound { service_type: String, city: String, office_name: String },
    OfficeNotFound { service_type: String, city: String },
    /// The lookup failed and the sender got the generic apology.
    LookupFailed,
}

pub async fn handle_message(state: &AppState, inbound: InboundMessage) -> Result<WebhookOutcome, WebhookError> {
    let body = inbound.body.ok_or(WebhookError::MissingField("Body"))?;
    let sender = inbound.from.ok_or(WebhookError::MissingField("From"))?;

    tracing::info!("Received message: {} from {}", body, sender);

    let extraction = state.extractor.extract(&body);
    let Some((service_type, city)) = extraction.complete() else {
        tracing::debug!("Incomplete query: {:?}", extraction);
        state.sender.send_message(&sender, reply::CLARIFICATION).await?;
        return Ok(WebhookOutcome::Clarification);
    };

    let offices = match state.directory.find_offices(service_type, city).await {
        Ok(offices) => offices,
        Err(e) => {
            tracing::error!("Database query error: {}", e);
            state.sender.send_message(&sender, reply::LOOKUP_FAILED).await?;
            return Ok(WebhookOutcome::LookupFailed);
        }
    };

    match offices.into_iter().next() {
        Some(office) => {
            let text = reply::office_found(service_type, city, &office);
            state.sender.send_message(&sender, &text).await?;
            Ok(WebhookOutcome::OfficeFound {
                service_type: service_type.to_string(),
                city: city.to_string(),
                office_name: office.office_name,
            })
        }
        None => {
            let text = reply::not_found(service_type, city);
            state.sender.send_message(&sender, &text).await?;
            Ok(WebhookOutcome::OfficeNotFound {
                service_type: service_type.to_string(),
                city: city.to_string(),
            })
        }
    }
}
