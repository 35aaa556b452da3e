//! Interaction state of one explorer page
//!
//! Each user action maps onto one method here. A failed action records its
//! message in `last_error` and leaves `last_results` as it was, so the table
//! on screen never disappears because of a typo in the custom editor.
//! Submitting an empty editor is a warning, not an error.

use crate::errors::{ExplorerError, Result};
use crate::ontology::{OntologyGraph, Preset};
use crate::query::{DisplayMode, QueryRunner, ResultSet};

/// Which query produced the results on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Preset(Preset),
    Custom,
}

#[derive(Debug, Clone)]
pub struct ExplorerSession {
    runner: QueryRunner,
    selected: Preset,
    custom_text: String,
    last_results: Option<ResultSet>,
    last_source: Option<QuerySource>,
    last_error: Option<String>,
    missing_query: bool,
}

impl ExplorerSession {
    pub fn new(runner: QueryRunner) -> Self {
        Self {
            runner,
            selected: Preset::default(),
            custom_text: String::new(),
            last_results: None,
            last_source: None,
            last_error: None,
            missing_query: false,
        }
    }

    pub fn selected(&self) -> Preset {
        self.selected
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn last_results(&self) -> Option<&ResultSet> {
        self.last_results.as_ref()
    }

    pub fn last_source(&self) -> Option<&QuerySource> {
        self.last_source.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Last custom run was submitted without any query text
    pub fn missing_query(&self) -> bool {
        self.missing_query
    }

    /// Sidebar click; the page starts over without results
    pub fn select(&mut self, preset: Preset) {
        tracing::debug!(preset = preset.number(), "preset selected");
        self.selected = preset;
        self.last_results = None;
        self.last_source = None;
        self.last_error = None;
        self.missing_query = false;
    }

    pub fn select_number(&mut self, number: u8) -> Result<Preset> {
        let preset = Preset::from_number(number)?;
        self.select(preset);
        Ok(preset)
    }

    /// "Run query" click: runs the selected preset with shortened identifiers
    pub fn run_selected(&mut self, graph: &OntologyGraph) -> Result<&ResultSet> {
        let preset = self.selected;
        let outcome = self.runner.run(graph, preset.sparql(), DisplayMode::Shortened);
        self.record(outcome, QuerySource::Preset(preset))
    }

    /// "Run custom" click
    pub fn run_custom(
        &mut self,
        graph: &OntologyGraph,
        text: &str,
        mode: DisplayMode,
    ) -> Result<&ResultSet> {
        self.custom_text = text.to_string();
        let outcome = self.runner.run(graph, text, mode);
        self.record(outcome, QuerySource::Custom)
    }

    fn record(&mut self, outcome: Result<ResultSet>, source: QuerySource) -> Result<&ResultSet> {
        match outcome {
            Ok(results) => {
                tracing::info!(source = ?source, rows = results.len(), "query succeeded");
                self.last_error = None;
                self.missing_query = false;
                self.last_source = Some(source);
                Ok(self.last_results.insert(results))
            }
            Err(ExplorerError::EmptyQuery) => {
                tracing::debug!(source = ?source, "empty query submitted");
                self.last_error = None;
                self.missing_query = true;
                Err(ExplorerError::EmptyQuery)
            }
            Err(e) => {
                tracing::warn!(source = ?source, error = %e, "query failed");
                self.last_error = Some(e.to_string());
                self.missing_query = false;
                Err(e)
            }
        }
    }

    /// Report a failure that happened outside the runner
    pub fn record_error(&mut self, err: &ExplorerError) {
        self.last_error = Some(err.to_string());
        self.missing_query = false;
    }
}
