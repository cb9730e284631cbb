mod config;
mod error;
mod handler;
mod model;
mod request;
mod response;
mod route;
mod store;

use std::sync::Arc;

use axum::http::Method;
use parking_lot::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use route::create_router;
use store::NoteStore;

/// State shared by every request. All store access goes through the one lock.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: Mutex<NoteStore>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any);

    let app = create_router(Arc::new(AppState::default()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let server = match axum::Server::try_bind(&addr) {
        Ok(server) => server,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    info!("Server is running on {}", addr);
    if let Err(err) = server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
        std::process::exit(1);
    }
    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
