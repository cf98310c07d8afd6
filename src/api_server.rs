//! HTTP surface: the messaging webhook and a liveness route.

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use colored::*;
use tower_http::trace::TraceLayer;

use crate::core::AppState;
use crate::error::WebhookError;
use crate::io::InboundMessage;
use crate::webhook::{handle_message, WebhookOutcome};

pub const LIVENESS_TEXT: &str = "Government Office Finder WhatsApp Bot is running!";

// --- Handler Functions ---

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn receive_webhook(
    State(state): State<AppState>,
    form: Result<Form<InboundMessage>, FormRejection>,
) -> Result<StatusCode, WebhookError> {
    let Form(inbound) = form?;
    let outcome = handle_message(&state, inbound).await?;
    match &outcome {
        WebhookOutcome::LookupFailed => tracing::warn!("Replied with lookup failure notice"),
        other => tracing::info!("Webhook handled: {:?}", other),
    }
    Ok(StatusCode::OK)
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/webhook", post(receive_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server and run until Ctrl-C.
pub async fn start_server(state: AppState, addr: &str) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    println!("{} Server is running on http://{}", "🌐".green(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    println!("{}", "👋 Graceful shutdown complete.".green());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for shutdown signal: {}", e);
    }
}
