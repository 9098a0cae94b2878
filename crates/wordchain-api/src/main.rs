//! Wordchain API server entry point.

use std::sync::{Arc, Mutex};

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use wordchain_api::config::Config;
use wordchain_api::error::AppError;
use wordchain_api::state::AppState;
use wordchain_core::clock::SystemClock;
use wordchain_core::rng::{DeterministicRng, SeededRng};
use wordchain_game::application::registry::SessionRegistry;
use wordchain_game::application::resolver::TurnResolver;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting wordchain API server");

    let config = Config::from_env()?;

    // An empty vocabulary stops startup here.
    let corpus = config.load_corpus()?;
    tracing::info!(words = corpus.len(), "word corpus loaded");

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded RNG");
            Arc::new(Mutex::new(SeededRng::new(seed)))
        }
        None => Arc::new(Mutex::new(SeededRng::from_entropy())),
    };

    let resolver = TurnResolver::new(
        Arc::new(corpus),
        SessionRegistry::with_shards(config.session_shards),
        Arc::new(SystemClock),
        rng,
    );

    let app = wordchain_api::app(AppState::new(resolver))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
