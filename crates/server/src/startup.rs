use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, PeopleConfig, ServerConfig};
use service::people::{PeopleStore, PersonDirectory};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Fresh directory, seeded or empty depending on config.
pub fn build_state(cfg: &PeopleConfig) -> ServerState {
    let people: Arc<dyn PeopleStore> = if cfg.seed {
        PersonDirectory::seeded()
    } else {
        PersonDirectory::empty()
    };
    ServerState { people }
}

pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(build_state(&cfg.people), build_cors())
}

fn load_bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);

    let addr = load_bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, seed = cfg.people.seed, "starting people api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
