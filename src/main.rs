//! Movie API server: loads config from env, connects and pings PostgreSQL, then serves.

use movie_api::{app, store, AppState, Config, PgMovieRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = match store::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "database unreachable, not starting");
            return Err(e.into());
        }
    };

    let repo = PgMovieRepository::new(pool, &config.database.schema);
    let shutdown = CancellationToken::new();
    let app = app(AppState::new(Arc::new(repo)).with_shutdown(shutdown.clone()));

    let listener = TcpListener::bind(config.server.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

/// Waits for Ctrl-C or SIGTERM, then cancels `shutdown` so in-flight storage calls stop.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
    shutdown.cancel();
}
