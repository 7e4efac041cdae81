use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use sportsplus::logging::init_logging;
use sportsplus::metrics::{init_metrics, metrics_app};
use sportsplus::router::init_router;
use sportsplus::state::AppState;
use sportsplus_config::ServerConfig;
use sportsplus_db::{DatabaseConfig, close_db_pool, init_db_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&db_config)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let state = AppState::from_env(pool.clone());
    let mut app = init_router(state);

    match init_metrics() {
        Ok(Some(handle)) => app = app.merge(metrics_app(handle)),
        Ok(None) => info!("metrics disabled"),
        Err(e) => warn!(error = %e, "failed to install metrics recorder"),
    }

    let server_config = ServerConfig::from_env();
    let addr = server_config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(%addr, "Sports Plus listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server exited with error")?;

    close_db_pool(pool).await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down gracefully");
}
