use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use simple_docker_api::config::{StoreBackend, load_config};
use simple_docker_api::core::clock::{Clock, SystemClock};
use simple_docker_api::core::error::AppError;
use simple_docker_api::features::messages::{
    InMemoryMessageStore, MessageStore, SledMessageStore,
};
use simple_docker_api::server::{AppState, build_router, shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;

    let sled_store = match config.store_backend {
        StoreBackend::Sled => Some(Arc::new(SledMessageStore::open(&config.db_path)?)),
        StoreBackend::Memory => None,
    };

    let store: Arc<dyn MessageStore> = match &sled_store {
        Some(sled_store) => sled_store.clone(),
        None => {
            tracing::warn!("using in-memory message store, messages are lost on restart");
            Arc::new(InMemoryMessageStore::new())
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app = build_router(AppState::new(store, clock));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, backend = ?config.store_backend, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    if let Some(sled_store) = sled_store {
        sled_store.flush().await?;
    }
    tracing::info!("server stopped");

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}
