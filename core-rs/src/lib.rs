//! # Qoyllur Rit'i SPARQL Explorer
//!
//! Browse the Qoyllur Rit'i festival ontology with canned or hand-written
//! SPARQL queries, view the rows as a table and export them as CSV.
//!
//! ## Flow
//!
//! ```text
//!  qoyllurity.ttl ──load once──▶ OntologyGraph (Oxigraph store)
//!                                      │
//!        Preset / custom text ──▶ QueryRunner ──▶ ResultSet ──▶ HTML table
//!                                                     │
//!                                                     └──────▶ CSV
//! ```
//!
//! The web page (`qoyllur serve`) and the command line share the same
//! library calls; neither keeps any state besides the current
//! [`ExplorerSession`].

pub mod config;
pub mod errors;
pub mod export;
pub mod ontology;
pub mod query;
pub mod session;
pub mod web;

pub use config::ExplorerConfig;
pub use errors::ExplorerError;
pub use ontology::{GraphCache, OntologyGraph, Preset, SparqlQuery};
pub use query::{DisplayMode, QueryRunner, ResultRow, ResultSet};
pub use session::{ExplorerSession, QuerySource};
pub use web::{create_router, AppState};

/// Crate version reported by the CLI and `/health`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
