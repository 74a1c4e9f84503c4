//! Consultas server
//!
//! Serves the consultas listing API over an in-memory data set.

use clap::Parser;
use consultas_persistence::backends::memory::InMemoryBackend;
use consultas_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Builds the in-memory backend from the server configuration.
fn create_memory_backend(config: &ServerConfig) -> InMemoryBackend {
    info!(
        generated = config.generated_records,
        seed = ?config.seed,
        "Initializing in-memory backend"
    );
    InMemoryBackend::seeded(config.generated_records, config.seed)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        default_page_size = config.default_page_size,
        max_page_size = config.max_page_size,
        response_delay_ms = config.response_delay_ms,
        "Starting consultas server"
    );

    let backend = create_memory_backend(&config);
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
