//! Integration tests for the explorer web page
//!
//! Drives the axum router in-process (no socket) through a full visit:
//! - Initial page with the sidebar and the first preset
//! - Select preset, run it, read the table back
//! - Custom query errors shown without losing the previous table
//! - CSV download headers and body
//! - Health endpoint with and without an ontology

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use qoyllur_explorer::{create_router, AppState, ExplorerConfig, ExplorerError, OntologyGraph};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

// ==================== Test Helper Functions ====================

fn app() -> Router {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("qoyllurity.ttl");
    let graph = OntologyGraph::load(path).map(Arc::new);
    create_router(Arc::new(AppState::new(graph, &ExplorerConfig::default())))
}

fn broken_app() -> Router {
    let graph = Err(ExplorerError::OntologyNotFound("qoyllurity.ttl".to_string()));
    create_router(Arc::new(AppState::new(graph, &ExplorerConfig::default())))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, body: &str) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some(&b"/"[..])
    );
    response.status()
}

// ==================== Page ====================

#[tokio::test]
async fn test_initial_page() {
    let app = app();
    let (status, html) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Seleccionar Consulta"));
    assert!(html.contains("<h2>Eventos Rituales</h2>"));
    assert!(html.contains("EJECUTAR CONSULTA"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_select_and_run_preset() {
    let app = app();

    assert_eq!(post_form(&app, "/select", "preset=2").await, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("<h2>Lugares</h2>"));
    assert!(!html.contains("<table>"));

    assert_eq!(post_form(&app, "/run", "").await, StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("✅ Resultados: 4"));
    assert!(html.contains("<td>Sinakara</td><td>Santuario de Sinakara</td>"));
    assert!(html.contains("📥 Descargar CSV"));
}

#[tokio::test]
async fn test_unknown_preset_shows_error() {
    let app = app();
    post_form(&app, "/select", "preset=9").await;

    let (_, html) = get(&app, "/").await;
    assert!(html.contains("❌ Error: Unknown preset: 9"));
    assert!(html.contains("<h2>Eventos Rituales</h2>"));
}

#[tokio::test]
async fn test_custom_query_raw_and_short() {
    let app = app();
    let query = "PREFIX+fest%3A+%3Chttp%3A%2F%2Fexample.org%2Ffestividades%23%3E+\
                 SELECT+%3Fd+WHERE+%7B+%3Fd+a+fest%3ADanza+%7D+ORDER+BY+%3Fd";

    post_form(&app, "/custom", &format!("query={}", query)).await;
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("✅ 3 resultados"));
    assert!(html.contains("<td>http://example.org/festividades#QhapaqQolla</td>"));

    post_form(&app, "/custom", &format!("query={}&short=on", query)).await;
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("<td>QhapaqQolla</td>"));
}

#[tokio::test]
async fn test_failed_custom_query_keeps_table() {
    let app = app();
    post_form(&app, "/select", "preset=4").await;
    post_form(&app, "/run", "").await;

    post_form(&app, "/custom", "query=SELECT+%3Fx+WHERE+%7B").await;
    let (_, html) = get(&app, "/").await;
    assert!(html.contains("❌ Error: Query error"));
    assert!(html.contains("<td>Qhapaq Negro</td>"));
    assert!(html.contains(">SELECT ?x WHERE {</textarea>"));
}

#[tokio::test]
async fn test_empty_custom_query() {
    let app = app();
    post_form(&app, "/custom", "query=").await;

    let (_, html) = get(&app, "/").await;
    assert!(html.contains("⚠️ Escribe una consulta primero"));
    assert!(!html.contains("❌ Error"));
}

// ==================== CSV ====================

#[tokio::test]
async fn test_csv_without_results_is_404() {
    let app = app();
    let (status, _) = get(&app, "/results.csv").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_csv_download() {
    let app = app();
    post_form(&app, "/select", "preset=5").await;
    post_form(&app, "/run", "").await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/results.csv").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"resultados.csv\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ukumari,nombre,cantidad");
    assert_eq!(lines[2], "UkumarisQuispicanchi,Ukumaris de Quispicanchi,");
}

// ==================== Health / load failure ====================

#[tokio::test]
async fn test_health_reports_triples() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["triples"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_missing_ontology() {
    let app = broken_app();

    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No se pudo cargar la ontología"));
    assert!(!html.contains("EJECUTAR CONSULTA"));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("qoyllurity.ttl"));
}
