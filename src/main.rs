//! maternal-risk: prenatal symptom risk triage service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, builds the keyword classifier, sets up the Axum router and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maternal_risk::classifier::{KeywordClassifier, RiskClassifier};
use maternal_risk::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use maternal_risk::http::start_server;
use maternal_risk::{create_router, AppState};

/// Keyword-based prenatal symptom risk triage service
#[derive(Parser, Debug)]
#[command(name = "maternal-risk", version, about)]
struct Args {
    /// Path to configuration file (optional when left at the default)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "maternal_risk=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicitly named config file must exist; the default one may not
    let (config_path, required) = match &args.config {
        Some(path) => (path.as_str(), true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    let config = AppConfig::load(config_path, required)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(path = %config_path, "Loaded configuration");

    let keywords = config.keyword_set()?;
    tracing::info!(
        version = %keywords.version(),
        high = keywords.high().len(),
        medium = keywords.medium().len(),
        "Loaded keyword set"
    );

    let classifier = KeywordClassifier::new(keywords);
    tracing::info!(classifier = classifier.name(), "Initialized classifier");

    let state = AppState::new(classifier);
    let app = create_router(state);

    start_server(app, &config.http).await?;

    Ok(())
}
