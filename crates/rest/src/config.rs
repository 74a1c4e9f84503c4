//! Server configuration for the consultas API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CONSULTAS_SERVER_PORT` | 3000 | Server port |
//! | `CONSULTAS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CONSULTAS_LOG_LEVEL` | info | Log level |
//! | `CONSULTAS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CONSULTAS_ENABLE_CORS` | true | Enable CORS |
//! | `CONSULTAS_CORS_ORIGINS` | * | Allowed origins |
//! | `CONSULTAS_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `CONSULTAS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `CONSULTAS_DEFAULT_PAGE_SIZE` | 15 | Page size when none is requested |
//! | `CONSULTAS_MAX_PAGE_SIZE` | 1000 | Largest page size a request may ask for |
//! | `CONSULTAS_GENERATED_RECORDS` | 50 | Random records added to the demo data |
//! | `CONSULTAS_SEED` | (none) | RNG seed for the generated records |
//! | `CONSULTAS_RESPONSE_DELAY_MS` | 0 | Artificial latency on listings |
//!
//! # Example
//!
//! ```rust
//! use consultas_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "0.0.0.0".to_string(),
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use clap::Parser;
use consultas_persistence::types::{DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, PageSettings};

/// Server configuration for the consultas API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "consultas")]
#[command(about = "Consultas listing API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CONSULTAS_SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CONSULTAS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CONSULTAS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CONSULTAS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CONSULTAS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CONSULTAS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "CONSULTAS_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "CONSULTAS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Page size used when a listing request has none.
    #[arg(long, env = "CONSULTAS_DEFAULT_PAGE_SIZE", default_value = "15")]
    pub default_page_size: u64,

    /// Maximum page size for listings.
    #[arg(long, env = "CONSULTAS_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: u64,

    /// Number of random records generated at start-up.
    #[arg(long, env = "CONSULTAS_GENERATED_RECORDS", default_value = "50")]
    pub generated_records: usize,

    /// Seed for the random record generator.
    #[arg(long, env = "CONSULTAS_SEED")]
    pub seed: Option<u64>,

    /// Artificial delay before answering a listing, in milliseconds.
    #[arg(long, env = "CONSULTAS_RESPONSE_DELAY_MS", default_value = "0")]
    pub response_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            generated_records: 50,
            seed: None,
            response_delay_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the page size limits for the listing service.
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }

    /// Returns the listing delay, if one is configured.
    pub fn response_delay(&self) -> Option<Duration> {
        (self.response_delay_ms > 0).then(|| Duration::from_millis(self.response_delay_ms))
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.response_delay_ms >= self.request_timeout.saturating_mul(1000) {
            errors.push("Response delay must be shorter than the request timeout".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, a fixed seed and no artificial delay.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            generated_records: 50,
            seed: Some(2024),
            response_delay_ms: 0,
        }
    }
}
