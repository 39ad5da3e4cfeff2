//! HTTP server for the veterinary chat assistant
//!
//! Thin transport layer over the assist pipeline: axum routes, request
//! parsing (JSON and multipart), error-to-status mapping, and the upload
//! image analysis. All state is built once by the infrastructure bootstrap
//! and shared through [`state::AppState`].

use std::path::Path;

use tracing::info;

use vca_infrastructure::config::ConfigLoader;
use vca_infrastructure::logging::init_logging;
use vca_infrastructure::{bootstrap, corpus};

/// Error-to-response mapping
pub mod error;
/// Request handlers
pub mod handlers;
/// Upload image analysis
pub mod image_analysis;
/// Request/response bodies
pub mod models;
/// Router assembly
pub mod routes;
/// Shared request state
pub mod state;

use state::AppState;

/// Load configuration from an optional explicit path
fn load_config(config_path: Option<&Path>) -> vca_domain::Result<vca_infrastructure::AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the HTTP server until shutdown
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let context = bootstrap(config).await?;
    let addr = format!(
        "{}:{}",
        context.config.server.host, context.config.server.port
    );
    let state = AppState {
        assist: context.assist,
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, routes::app_router(state)).await?;

    Ok(())
}

/// Embed a corpus directory and write the index snapshot
///
/// Offline counterpart of the serve path: the snapshot it writes is what
/// `retrieval.snapshot_path` loads at startup.
pub async fn build_snapshot(
    config_path: Option<&Path>,
    corpus_dir: &Path,
    out: &Path,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let embedder = vca_application::ports::registry::resolve_embedding_provider(
        &vca_application::ports::registry::EmbeddingProviderConfig {
            provider: config.embedding.provider.clone(),
            model: config.embedding.model.clone(),
            base_url: config.embedding.base_url.clone(),
            api_key: config.embedding.api_key.clone(),
            ..Default::default()
        },
    )
    .map_err(vca_domain::Error::configuration)?;

    let documents = corpus::load_corpus_dir(corpus_dir)?;
    info!(documents = documents.len(), "embedding corpus");

    let snapshot = corpus::embed_corpus(embedder.as_ref(), &documents).await?;
    snapshot.save(out)?;
    info!(path = %out.display(), entries = snapshot.entries.len(), "snapshot written");

    Ok(())
}
