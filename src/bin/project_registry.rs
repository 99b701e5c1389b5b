//! Project registry HTTP server.
//!
//! Serves the project routes over a `PostgreSQL` store when `DATABASE_URL`
//! is set, or over an in-memory store otherwise.

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::WrapErr;
use project_registry::{
    config::RegistryConfig,
    project::{
        adapters::{http, memory::InMemoryProjectRepository, postgres::PostgresProjectRepository},
        ports::ProjectRepository,
        services::ProjectLifecycleService,
    },
    telemetry,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = RegistryConfig::parse();
    config.validate().wrap_err("invalid configuration")?;
    telemetry::init(&config.log_level, config.log_format).wrap_err("initialise logging")?;

    info!(
        bind_address = %config.bind_address,
        persistent = config.database_url.is_some(),
        "starting project registry"
    );

    match config.database_url.clone() {
        Some(database_url) => {
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                Pool::builder()
                    .max_size(pool_size)
                    .build(ConnectionManager::<PgConnection>::new(database_url))
            })
            .await
            .wrap_err("join connection pool builder")?
            .wrap_err("build PostgreSQL connection pool")?;
            serve(PostgresProjectRepository::new(pool), config.bind_address).await
        }
        None => {
            warn!("DATABASE_URL is not set; projects will not survive a restart");
            serve(InMemoryProjectRepository::new(), config.bind_address).await
        }
    }
}

async fn serve<R>(repository: R, bind_address: SocketAddr) -> eyre::Result<()>
where
    R: ProjectRepository + 'static,
{
    let service = ProjectLifecycleService::new(Arc::new(repository));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .wrap_err_with(|| format!("bind {bind_address}"))?;
    info!(%bind_address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("serve HTTP")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, terminating");
}
