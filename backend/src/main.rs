//! Backend entry-point: loads settings, prepares storage and serves the
//! record endpoints.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use vetsoft::inbound::http::health::HealthState;
use vetsoft::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

async fn connect(database_url: &str, max_size: u32) -> io::Result<DbPool> {
    run_pending_migrations(database_url)
        .await
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|error| io::Error::other(error.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect(url, settings.pool_max_size()).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
