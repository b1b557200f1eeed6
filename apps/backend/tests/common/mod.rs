//! Common test utilities and fixtures for integration tests.
//!
//! The service is stateless, so every test builds its own router over the
//! built-in surah table and drives it through axum-test.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use hifz_backend::config::Config;
use hifz_backend::{build_router, AppState};
use hifz_core::SurahTable;

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config, SurahTable::standard());
        Self {
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start an in-memory test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
