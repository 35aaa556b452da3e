//! Error types for the Qoyllur Rit'i explorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Ontology file not found: {0}")]
    OntologyNotFound(String),

    #[error("Failed to load ontology: {0}")]
    OntologyLoad(String),

    #[error("Failed to parse Turtle: {0}")]
    OntologyParse(String),

    #[error("Ontology unavailable: {0}")]
    GraphUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Empty query: write a query first")]
    EmptyQuery,

    #[error("Unknown preset: {0} (expected 1-5)")]
    UnknownPreset(u8),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<oxigraph::sparql::EvaluationError> for ExplorerError {
    fn from(err: oxigraph::sparql::EvaluationError) -> Self {
        ExplorerError::Query(err.to_string())
    }
}

impl From<oxigraph::store::StorageError> for ExplorerError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        ExplorerError::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
