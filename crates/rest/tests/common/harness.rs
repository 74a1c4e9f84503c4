//! REST API test harness.

use axum_test::{TestResponse, TestServer};
use consultas_persistence::backends::memory::InMemoryBackend;
use consultas_persistence::types::Consulta;
use consultas_rest::{AppState, ServerConfig, create_app_with_config, routing::create_routes};

/// Test harness wrapping a [`TestServer`] over an in-memory backend.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::seeded();
/// let response = harness.get("/api/consultas").await;
/// response.assert_status_ok();
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Harness over the fixed records plus 50 generated ones (seed 2024).
    pub fn seeded() -> Self {
        let config = ServerConfig::for_testing();
        let backend = InMemoryBackend::seeded(config.generated_records, config.seed);
        Self::with_backend(backend, config)
    }

    /// Harness over exactly `records`.
    pub fn with_records(records: Vec<Consulta>) -> Self {
        Self::with_backend(InMemoryBackend::new(records), ServerConfig::for_testing())
    }

    /// Harness over `backend` with the full middleware stack.
    pub fn with_backend(backend: InMemoryBackend, config: ServerConfig) -> Self {
        let app = create_app_with_config(backend, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, config }
    }

    /// Harness over the bare routes, without middleware.
    pub fn routes_only(backend: InMemoryBackend, config: ServerConfig) -> Self {
        let state = AppState::new(backend, config.clone());
        let server =
            TestServer::new(create_routes(state)).expect("Failed to create test server");
        Self { server, config }
    }

    /// Sends a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }
}
