use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{DemoProfileStore, OpenAiProvider};
use application::EngagementService;
use atelier::{ProfileStore, QueryEngine};

/// Application state shared across all routes.
///
/// Everything in here is read-only after startup: the fixture store never
/// changes and the engine holds only the process-wide provider handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub engagement: Arc<EngagementService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Atelier API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎨 Atelier API initializing...");

    // The backend credential is the only process-wide state; without it the
    // server cannot do anything useful, so absence is fatal.
    let api_key = resolve_api_key()?;

    let provider = match std::env::var("ATELIER_OPENAI_BASE_URL") {
        Ok(base_url) => {
            tracing::info!("🔌 Using backend at {}", base_url);
            OpenAiProvider::new(api_key).with_base_url(base_url)
        }
        Err(_) => OpenAiProvider::new(api_key),
    };

    let engine = Arc::new(QueryEngine::new(Arc::new(provider)));
    let store: Arc<dyn ProfileStore> = Arc::new(DemoProfileStore::new());
    let engagement = Arc::new(EngagementService::new(store.clone(), engine));

    tracing::info!(
        "🗂  Profile store loaded ({} clients, {} events)",
        store.clients().len(),
        store.events().len()
    );

    let state = AppState { store, engagement };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::clients::router())
        .merge(routes::events::router())
        .merge(routes::engage::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr =
        std::env::var("ATELIER_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Atelier API ready on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server exited with an error")?;

    Ok(())
}

#[derive(Deserialize)]
struct Secrets {
    api_key: Option<String>,
}

/// Resolve the backend credential: `OPENAI_API_KEY` from the environment
/// first, then the `api_key` entry of `<config dir>/atelier/secrets.toml`.
fn resolve_api_key() -> Result<String> {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }

    let path = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("atelier")
        .join("secrets.toml");

    let content = std::fs::read_to_string(&path).with_context(|| {
        format!(
            "OPENAI_API_KEY is not set and no secrets file was found at {:?}",
            path
        )
    })?;

    let secrets: Secrets =
        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;

    secrets
        .api_key
        .filter(|key| !key.trim().is_empty())
        .with_context(|| format!("No api_key entry in {:?}", path))
}
