//! Documentation of the Manifest Monitor members pages.
//!
//! Server-rendered listing and profile pages for members of the National Diet,
//! read from a hosted PostgREST table (Supabase).
//!
//!
//!
//! # Routes
//! - `GET /` redirects to `/members`
//! - `GET /members` lists every member, split into 衆議院 and 参議院 sections
//! - `GET /members/{id}` shows one member, 404 page if the id is unknown
//! - `GET /placeholder.svg` placeholder portrait
//! - `GET /health` liveness
//!
//! Every page does at most one store query and awaits it before rendering.
//! Nothing is cached and nothing is written.
//!
//!
//!
//! # Failure States
//!
//! | Condition | Status | Page |
//! |---|---|---|
//! | URL or key missing | 500 | "Configuration error." |
//! | Store unreachable or query rejected | 502 | "Error loading members: ..." or "Error loading member: ..." |
//! | No row for the id | 404 | 議員が見つかりません |
//! | Photo fails to load | n/a | placeholder swapped in by the browser |
//!
//! A store failure on the profile page is reported as a store failure, not as a
//! missing member. Only the single-object "0 rows" response means not found.
//!
//!
//!
//! # Environment
//!
//! | Key | Default |
//! |---|---|
//! | `RUST_PORT` | `3000` |
//! | `SUPABASE_URL` | none |
//! | `SUPABASE_ANON_KEY` | none, also read from `/run/secrets/SUPABASE_ANON_KEY` |
//! | `STORE_TIMEOUT_SECS` | `10` |
//! | `IMAGE_HOSTS` | `www.shugiin.go.jp,www.sangiin.go.jp` |
//! | `RUST_LOG` | unset, see `tracing_subscriber::EnvFilter` |
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info SUPABASE_URL=https://xyz.supabase.co SUPABASE_ANON_KEY=... cargo run -p manifest-monitor
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::sync::Arc;

use axum::{Router, routing::get};
use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod card;
pub mod config;
pub mod error;
pub mod image;
pub mod layout;
pub mod member;
pub mod members;
pub mod routes;
pub mod state;

use config::Config;
use image::PLACEHOLDER_IMAGE;
use routes::{
    fallback_handler, health_handler, index_handler, member_handler, members_handler,
    placeholder_handler,
};
use state::State;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let state = State::new(Config::load())?;

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/members", get(members_handler))
        .route("/members/:id", get(member_handler))
        .route(PLACEHOLDER_IMAGE, get(placeholder_handler))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
