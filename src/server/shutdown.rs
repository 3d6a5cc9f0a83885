use std::future;

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            future::pending::<()>().await;
        }
    }
}
