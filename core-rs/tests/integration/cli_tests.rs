//! Integration tests for the `qoyllur` command line
//!
//! Runs the built binary against the shipped `qoyllurity.ttl` and checks:
//! - Preset listing and query text
//! - Table, CSV and JSON output of preset and custom queries
//! - `--output` CSV files
//! - Non-zero exit with the message on stderr for load and query failures

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// ==================== Test Helper Functions ====================

fn ontology_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("qoyllurity.ttl")
}

/// Run `qoyllur` inside `dir` (no qoyllur.yaml there) with the shipped ontology
fn qoyllur_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qoyllur"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--ontology")
        .arg(ontology_path())
        .args(args)
        .output()
        .expect("Failed to run qoyllur")
}

fn qoyllur(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    qoyllur_in(&dir, args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ==================== Presets ====================

#[test]
fn test_presets_listing() {
    let output = qoyllur(&["presets"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let listing = stdout(&output);
    assert_eq!(listing.lines().count(), 5);
    assert!(listing.contains("1. Eventos"));
    assert!(listing.contains("Ukumaris"));
}

#[test]
fn test_show_prints_query_text() {
    let output = qoyllur(&["show", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("SELECT ?lugar ?nombre WHERE {"));
}

#[test]
fn test_run_unknown_preset_fails() {
    let output = qoyllur(&["run", "9"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown preset: 9"));
}

// ==================== Output formats ====================

#[test]
fn test_run_table() {
    let output = qoyllur(&["run", "1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let table = stdout(&output);
    assert!(table.contains("Eventos Rituales"));
    assert!(table.contains("✅ Resultados: 4"));
    assert!(table.contains("SubidaAlNevado"));
}

#[test]
fn test_run_csv() {
    let output = qoyllur(&["run", "5", "--format", "csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let csv = stdout(&output);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ukumari,nombre,cantidad");
    assert_eq!(lines[1], "Ukumaris_Paucartambo_2025,Ukumaris de Paucartambo,120");
}

#[test]
fn test_run_json() {
    let output = qoyllur(&["run", "2", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["variables"], serde_json::json!(["lugar", "nombre"]));
    assert_eq!(json["rows"].as_array().unwrap().len(), 4);
    assert_eq!(json["rows"][0][0], "Mawallani");
}

#[test]
fn test_run_output_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("danzas.csv");

    let output = qoyllur_in(&dir, &["run", "4", "--output", target.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("3 rows written"));

    let written = fs::read_to_string(&target).unwrap();
    assert_eq!(written.lines().next(), Some("danza,nombre"));
    assert_eq!(written.lines().count(), 4);
}

// ==================== Custom queries ====================

#[test]
fn test_query_raw_and_short() {
    let sparql = "PREFIX fest: <http://example.org/festividades#> \
                  SELECT ?lugar WHERE { ?lugar a fest:Lugar } ORDER BY ?lugar";

    let raw = qoyllur(&["query", sparql, "--format", "csv"]);
    assert!(raw.status.success(), "stderr: {}", stderr(&raw));
    assert_eq!(
        stdout(&raw).lines().nth(1),
        Some("http://example.org/festividades#Mawallani")
    );

    let short = qoyllur(&["query", sparql, "--short", "--format", "csv"]);
    assert_eq!(stdout(&short).lines().nth(1), Some("Mawallani"));
}

#[test]
fn test_query_from_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("danzas.rq");
    fs::write(
        &file,
        "PREFIX fest: <http://example.org/festividades#>\nSELECT ?d WHERE { ?d a fest:Danza }",
    )
    .unwrap();

    let output = qoyllur_in(&dir, &["query", "--file", file.to_str().unwrap(), "--format", "csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 4);
}

#[test]
fn test_query_blank_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("vacia.rq");
    fs::write(&file, "  \n").unwrap();

    let output = qoyllur_in(&dir, &["query", "--file", file.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Escribe una consulta primero"));
}

#[test]
fn test_invalid_query_fails() {
    let output = qoyllur(&["query", "SELECT ?x WHERE {"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Query error"));
    assert!(stdout(&output).is_empty());
}

// ==================== Loading ====================

#[test]
fn test_stats() {
    let output = qoyllur(&["stats"]);
    assert!(output.status.success());

    let stats = stdout(&output);
    assert!(stats.contains("qoyllurity.ttl"));
    assert!(stats.contains("Triples:"));
}

#[test]
fn test_missing_ontology_fails() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_qoyllur"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--ontology", "missing.ttl", "stats"])
        .output()
        .expect("Failed to run qoyllur");

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("Ontology unavailable"));
    assert!(message.contains("missing.ttl"));
}
