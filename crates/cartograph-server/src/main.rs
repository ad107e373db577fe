use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cartograph_core::prompts::PromptStore;
use cartograph_export::styles::DocumentStyles;
use cartograph_llm::client::OllamaClient;
use cartograph_server::config::{LogFormat, ServerConfig};
use cartograph_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let prompts = PromptStore::load(&config.prompts_path)?;
    let model = OllamaClient::new(&config.ollama)?;
    std::fs::create_dir_all(&config.output_dir)?;

    info!(
        endpoint = %config.ollama.endpoint,
        model = model.model(),
        output_dir = %config.output_dir.display(),
        "configured model client"
    );

    let state = AppState {
        prompts: Arc::new(prompts),
        model: Arc::new(model),
        styles: Arc::new(DocumentStyles::default()),
        output_dir: config.output_dir.clone(),
        logo_path: config.logo_path.clone(),
    };

    let app = cartograph_server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
