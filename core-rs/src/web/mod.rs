//! Web page for the explorer
//!
//! One shared session per server, mirroring a single-user desktop page:
//! every POST mutates the session and redirects back to `/`, which renders
//! whatever the session holds.

pub mod render;

use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::trace::TraceLayer;

use crate::config::ExplorerConfig;
use crate::errors::Result;
use crate::export;
use crate::ontology::OntologyGraph;
use crate::query::{DisplayMode, QueryRunner};
use crate::session::ExplorerSession;

/// Shared server state
pub struct AppState {
    graph: std::result::Result<Arc<OntologyGraph>, String>,
    csv_filename: String,
    session: Mutex<ExplorerSession>,
}

impl AppState {
    /// Build state from the outcome of the ontology load
    pub fn new(graph: Result<Arc<OntologyGraph>>, config: &ExplorerConfig) -> Self {
        Self {
            graph: graph.map_err(|e| e.to_string()),
            csv_filename: config.csv_filename.clone(),
            session: Mutex::new(ExplorerSession::new(QueryRunner::new(
                config.namespace_marker.clone(),
            ))),
        }
    }

    fn session(&self) -> MutexGuard<'_, ExplorerSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn select(&self, number: u8) {
        let mut session = self.session();
        if let Err(e) = session.select_number(number) {
            session.record_error(&e);
        }
    }

    fn run_selected(&self) {
        if let Ok(graph) = &self.graph {
            // Failures are kept in the session and shown on the page
            let _ = self.session().run_selected(graph);
        }
    }

    fn run_custom(&self, text: &str, mode: DisplayMode) {
        if let Ok(graph) = &self.graph {
            let _ = self.session().run_custom(graph, text, mode);
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub preset: u8,
}

#[derive(Debug, Deserialize)]
pub struct CustomForm {
    #[serde(default)]
    pub query: String,
    /// Checkbox; present only when ticked
    pub short: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create the explorer router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/select", post(select_preset))
        .route("/run", post(run_selected))
        .route("/custom", post(run_custom))
        .route("/results.csv", get(download_csv))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "explorer listening on http://{}", addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    match &state.graph {
        Err(message) => Html(render::load_error_page(message)),
        Ok(_) => Html(render::page(&state.session())),
    }
}

async fn select_preset(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectForm>,
) -> Redirect {
    state.select(form.preset);
    Redirect::to("/")
}

async fn run_selected(State(state): State<Arc<AppState>>) -> Redirect {
    let worker = Arc::clone(&state);
    if let Err(e) = tokio::task::spawn_blocking(move || worker.run_selected()).await {
        tracing::error!(error = %e, "query task panicked");
    }
    Redirect::to("/")
}

async fn run_custom(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CustomForm>,
) -> Redirect {
    let mode = if form.short.is_some() {
        DisplayMode::Shortened
    } else {
        DisplayMode::Raw
    };
    let worker = Arc::clone(&state);
    if let Err(e) = tokio::task::spawn_blocking(move || worker.run_custom(&form.query, mode)).await {
        tracing::error!(error = %e, "query task panicked");
    }
    Redirect::to("/")
}

async fn download_csv(State(state): State<Arc<AppState>>) -> Response {
    let csv = {
        let session = state.session();
        match session.last_results() {
            None => return (StatusCode::NOT_FOUND, "no results to export").into_response(),
            Some(results) => export::to_csv(results),
        }
    };

    match csv {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, format!("{}; charset=utf-8", export::CSV_CONTENT_TYPE)),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", state.csv_filename),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let version = crate::VERSION.to_string();
    match &state.graph {
        Ok(graph) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                version,
                triples: Some(graph.triple_count()),
                error: None,
            }),
        ),
        Err(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable".to_string(),
                version,
                triples: None,
                error: Some(message.clone()),
            }),
        ),
    }
}
