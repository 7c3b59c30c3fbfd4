//! Development sheet store - in-memory stand-in for the remote endpoint
//!
//! Serves the same contract the client expects: `GET /` returns the stored
//! sheet nested under `body`, `POST /` replaces it. The last save wins.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::application::dto::{LoadResponse, SheetSnapshot};

#[derive(Debug, Clone)]
struct StoredSheet {
    snapshot: SheetSnapshot,
    saved_at: DateTime<Utc>,
}

/// Shared store state
#[derive(Debug, Default)]
pub struct SheetStoreState {
    stored: RwLock<Option<StoredSheet>>,
}

impl SheetStoreState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveResponse {
    status_code: u16,
    message: &'static str,
    saved_at: DateTime<Utc>,
}

/// Create the store routes
pub fn create_store_routes() -> Router<Arc<SheetStoreState>> {
    Router::new()
        .route("/", get(load_sheet).post(save_sheet))
        .route("/health", get(health_check))
}

/// Full store application with request tracing
pub fn store_app(state: Arc<SheetStoreState>) -> Router {
    create_store_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the store until Ctrl+C
pub async fn run_store_server(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Sheet store listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let app = store_app(Arc::new(SheetStoreState::new()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received, stopping sheet store");
            }
        })
        .await?;

    Ok(())
}

async fn load_sheet(
    State(state): State<Arc<SheetStoreState>>,
) -> Result<Json<LoadResponse>, (StatusCode, String)> {
    let stored = state.stored.read().await;
    match stored.as_ref() {
        Some(sheet) => {
            tracing::debug!(saved_at = %sheet.saved_at, "Serving stored sheet");
            Ok(Json(LoadResponse {
                status_code: Some(StatusCode::OK.as_u16()),
                body: sheet.snapshot.clone(),
            }))
        }
        None => Err((StatusCode::NOT_FOUND, "No character sheet saved yet".to_string())),
    }
}

async fn save_sheet(
    State(state): State<Arc<SheetStoreState>>,
    Json(snapshot): Json<SheetSnapshot>,
) -> Json<SaveResponse> {
    let saved_at = Utc::now();
    *state.stored.write().await = Some(StoredSheet { snapshot, saved_at });
    tracing::info!(%saved_at, "Stored character sheet");

    Json(SaveResponse {
        status_code: StatusCode::OK.as_u16(),
        message: "Character sheet saved",
        saved_at,
    })
}

async fn health_check() -> &'static str {
    "OK"
}
