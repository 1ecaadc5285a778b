mod analyze;
mod config;
mod db;
mod errors;
mod ingest;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::ingest::listings::RemoteListingsClient;
use crate::matching::vocabulary::{RoleCatalog, SkillVocabulary};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobVista API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and ensure the jobs table exists
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    ingest::store::ensure_schema(&db).await?;

    // Load the skill vocabulary and role catalog once. A malformed source
    // is fatal here: serving with a silently empty vocabulary would degrade
    // every downstream match.
    let vocabulary = Arc::new(SkillVocabulary::load(&config.skills_file)?);
    info!("Skill vocabulary loaded ({} skills)", vocabulary.len());

    let roles = Arc::new(RoleCatalog::load(&config.roles_file)?);
    info!("Role catalog loaded ({} roles)", roles.len());

    // Initialize the remote listings client behind the PostingSource seam
    let listings = Arc::new(RemoteListingsClient::new(
        config.listings_api_url.clone(),
        config.listings_app_id.clone(),
        config.listings_app_key.clone(),
        config.default_location.clone(),
    ));

    let state = AppState {
        db,
        vocabulary,
        roles,
        listings,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
