/**
 * ontology module
 *
 * - graph: Turtle file parsed into an in-memory Oxigraph store
 * - cache: load-once holder for the graph
 * - presets: canned SPARQL queries over the festival namespace
 */

pub mod cache;
pub mod graph;
pub mod presets;

pub use cache::{shared_graph, GraphCache};
pub use graph::OntologyGraph;
pub use presets::{Preset, SparqlQuery, CUSTOM_PLACEHOLDER, FEST_NS};
