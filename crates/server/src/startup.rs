use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use models::Tree;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::routes::{self, ServerState};
use service::trees::TreeStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Storage file path from configs, the `TREES_DATA_FILE` env var, or the default
fn load_storage_path() -> String {
    match configs::load_default() {
        Ok(cfg) => {
            let mut s = cfg.storage;
            s.normalize_from_env();
            s.data_file
        }
        Err(_) => env::var("TREES_DATA_FILE").unwrap_or_else(|_| "data/trees.json".to_string()),
    }
}

/// Write the demo oak record and read it back, logging the stored entry.
async fn seed_example_tree(trees: &TreeStore) -> anyhow::Result<()> {
    let oak = Tree {
        id: Some("3".to_string()),
        species: Some("oak".to_string()),
        age: Some(3.0),
        location: Some("The Park".to_string()),
    };
    let id = oak.key_id().to_string();
    trees.set(&id, oak).await?;
    let stored = trees.get(&id).await?;
    debug!(id, ?stored, "seed record readback");
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Process-wide storage handle, shared by all request handlers
    let trees = TreeStore::open(load_storage_path()).await?;
    seed_example_tree(&trees).await?;

    let state = ServerState { trees: Arc::clone(&trees) };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting tree registry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
