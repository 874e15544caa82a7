mod catalog;
mod config;
mod errors;
mod extractor;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::extractor::SkillMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Mentor API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static career catalog and compile the skill vocabulary once;
    // both are shared read-only across all requests.
    let catalog = Arc::new(CareerCatalog::builtin());
    info!("Career catalog loaded ({} careers)", catalog.len());

    let matcher = Arc::new(SkillMatcher::new());
    info!(
        "Skill vocabulary compiled ({} entries)",
        matcher.vocabulary_size()
    );

    let state = AppState { catalog, matcher };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
