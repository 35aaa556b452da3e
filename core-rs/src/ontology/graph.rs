/**
 * graph.rs
 * In-memory festival ontology backed by an Oxigraph store
 */

use oxigraph::io::RdfFormat;
use oxigraph::store::{LoaderError, Store};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ExplorerError, Result};

/// Read-only view of the parsed Turtle file
pub struct OntologyGraph {
    store: Store,
    source: PathBuf,
    triple_count: usize,
}

impl std::fmt::Debug for OntologyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyGraph")
            .field("source", &self.source)
            .field("triple_count", &self.triple_count)
            .finish()
    }
}

impl OntologyGraph {
    /// Parse a Turtle file into a fresh in-memory store
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading ontology");

        if !path.exists() {
            return Err(ExplorerError::OntologyNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            return Err(ExplorerError::OntologyLoad(format!(
                "Path is a directory: {}",
                path.display()
            )));
        }

        let content = fs::read(path)?;
        let mut graph = Self::parse(&content)?;
        graph.source = path.to_path_buf();

        tracing::info!(
            path = %path.display(),
            triples = graph.triple_count,
            "ontology loaded"
        );
        Ok(graph)
    }

    /// Parse Turtle held in memory
    pub fn from_turtle(turtle: &str) -> Result<Self> {
        Self::parse(turtle.as_bytes())
    }

    fn parse(content: &[u8]) -> Result<Self> {
        let store = Store::new()?;

        store
            .load_from_reader(RdfFormat::Turtle, content)
            .map_err(|e| match e {
                LoaderError::Parsing(parse_err) => ExplorerError::OntologyParse(parse_err.to_string()),
                other => ExplorerError::OntologyLoad(other.to_string()),
            })?;

        let triple_count = store.len()?;

        Ok(Self {
            store,
            source: PathBuf::new(),
            triple_count,
        })
    }

    pub fn triple_count(&self) -> usize {
        self.triple_count
    }

    /// File the graph was read from (empty for in-memory sources)
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }
}
