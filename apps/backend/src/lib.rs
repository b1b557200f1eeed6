pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use hifz_core::{RevisionScheduler, Surah, SurahTable};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub surahs: Arc<SurahTable>,
    pub scheduler: Arc<RevisionScheduler>,
}

impl AppState {
    pub fn new(config: Config, surahs: SurahTable) -> Self {
        Self {
            config: Arc::new(config),
            surahs: Arc::new(surahs),
            scheduler: Arc::new(RevisionScheduler::default()),
        }
    }
}

/// Load the surah table, from a JSON file when a path is given.
pub fn load_surah_table(path: Option<&Path>) -> error::Result<SurahTable> {
    let Some(path) = path else {
        return Ok(SurahTable::standard());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ApiError::Internal(format!("reading {}: {}", path.display(), e)))?;
    let surahs: Vec<Surah> = serde_json::from_str(&contents)
        .map_err(|e| ApiError::Internal(format!("parsing {}: {}", path.display(), e)))?;

    Ok(SurahTable::new(surahs)?)
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/surahs", get(routes::surahs::list))
        .route("/api/surahs/{id}", get(routes::surahs::get))
        .route("/api/juz/{juz}/surahs", get(routes::surahs::in_juz))
        .route("/api/revision/agenda", post(routes::revision::agenda))
        .route("/api/progress", post(routes::progress::summary))
        .route("/api/streak", post(routes::streak::record_activity))
        .route("/api/rank", post(routes::rank::summary));

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading surah table...");
    let surahs = load_surah_table(config.surah_table_path.as_deref())?;
    tracing::info!("Loaded {} surahs", surahs.len());

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config, surahs));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
