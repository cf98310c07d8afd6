use office_finder::api_server::start_server;
use office_finder::config::BotConfig;
use office_finder::core::{AppState, QueryExtractor, SynonymCatalog};
use office_finder::directory::SupabaseDirectory;
use office_finder::io::TwilioClient;

use anyhow::{Context, Result};
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env").ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Configuration
    let config = BotConfig::from_env().context("Failed to load configuration")?;

    // 2. Synonym tables
    let catalog = match &config.synonyms_path {
        Some(path) => {
            let catalog = SynonymCatalog::load(path)
                .with_context(|| format!("Failed to load synonyms from {}", path.display()))?;
            println!("   {} Synonyms loaded from {}", "📚".green(), path.display());
            catalog
        }
        None => SynonymCatalog::default(),
    };
    if catalog.services.is_empty() || catalog.cities.is_empty() {
        eprintln!("   {} A synonym table is empty; every query will get the clarification reply", "⚠️".yellow());
    }
    println!(
        "   {} {} service types, {} cities",
        "🧭".cyan(),
        catalog.services.entries().len(),
        catalog.cities.entries().len()
    );

    // 3. External clients, built once and shared
    let directory = Arc::new(SupabaseDirectory::new(
        &config.supabase_url,
        config.supabase_key.clone(),
        config.offices_table.clone(),
    ));
    let sender = Arc::new(TwilioClient::new(
        &config.twilio_api_base,
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_from.clone(),
    ));

    let state = AppState::new(QueryExtractor::new(catalog), directory, sender);

    println!("{}", "🚀 Government Office Finder bot starting".green().bold());
    start_server(state, &config.listen_addr()).await
}
