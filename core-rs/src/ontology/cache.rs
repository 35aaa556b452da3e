//! Load-once cache for the ontology graph
//!
//! The first access parses the Turtle file; every later access reuses the
//! outcome of that attempt. A failed load is remembered as well, so the file
//! is never re-read within the same process.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::graph::OntologyGraph;
use crate::errors::{ExplorerError, Result};

static GLOBAL_CACHE: OnceCell<GraphCache> = OnceCell::new();

pub struct GraphCache {
    path: PathBuf,
    outcome: OnceCell<std::result::Result<Arc<OntologyGraph>, String>>,
}

impl GraphCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            outcome: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Graph parsed on first call
    pub fn get(&self) -> Result<Arc<OntologyGraph>> {
        let outcome = self.outcome.get_or_init(|| {
            OntologyGraph::load(&self.path).map(Arc::new).map_err(|e| {
                tracing::error!(path = %self.path.display(), error = %e, "ontology unavailable");
                e.to_string()
            })
        });

        outcome
            .as_ref()
            .map(Arc::clone)
            .map_err(|message| ExplorerError::GraphUnavailable(message.clone()))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome.get(), Some(Ok(_)))
    }
}

/// Process-wide cache; the path given on the first call wins
pub fn global(path: impl Into<PathBuf>) -> &'static GraphCache {
    GLOBAL_CACHE.get_or_init(|| GraphCache::new(path))
}

/// Shortcut for `global(path).get()`
pub fn shared_graph(path: impl Into<PathBuf>) -> Result<Arc<OntologyGraph>> {
    global(path).get()
}
