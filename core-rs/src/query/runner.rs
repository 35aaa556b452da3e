/**
 * runner.rs
 * Executes SPARQL against the ontology graph and reshapes the bindings into rows
 */

use oxigraph::model::Term;
use oxigraph::sparql::QueryResults;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

use super::display::{cell, DisplayMode};
use crate::errors::{ExplorerError, Result};
use crate::ontology::OntologyGraph;

/// Column of ASK results
pub const ASK_VARIABLE: &str = "result";

/// Columns of CONSTRUCT / DESCRIBE results
pub const TRIPLE_VARIABLES: [&str; 3] = ["subject", "predicate", "object"];

/// One result row; `cells[i]` belongs to the i-th variable of its result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultRow {
    cells: Vec<String>,
}

impl ResultRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Ordered rows produced by a single query execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    variables: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(variables: Vec<String>) -> Self {
        Self {
            variables,
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with "" and long rows truncated
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.variables.len(), String::new());
        self.rows.push(ResultRow { cells });
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell of `row` for the variable `name`
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let column = self.variables.iter().position(|v| v == name)?;
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(String::as_str)
    }

    /// Row as a variable → value map
    pub fn row_map(&self, row: usize) -> Option<HashMap<String, String>> {
        let row = self.rows.get(row)?;
        Some(
            self.variables
                .iter()
                .cloned()
                .zip(row.cells.iter().cloned())
                .collect(),
        )
    }
}

/// Runs queries with a fixed namespace marker
#[derive(Debug, Clone)]
pub struct QueryRunner {
    marker: String,
}

impl QueryRunner {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Execute `sparql` and render every binding with `mode`
    pub fn run(&self, graph: &OntologyGraph, sparql: &str, mode: DisplayMode) -> Result<ResultSet> {
        if sparql.trim().is_empty() {
            return Err(ExplorerError::EmptyQuery);
        }

        let started = Instant::now();
        let results = graph.store().query(sparql)?;

        let result_set = match results {
            QueryResults::Solutions(solutions) => {
                let variables: Vec<String> = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect();
                let mut result_set = ResultSet::new(variables);

                for solution in solutions {
                    let solution = solution?;
                    let cells = result_set
                        .variables
                        .iter()
                        .map(|var| cell(solution.get(var.as_str()), mode, &self.marker))
                        .collect();
                    result_set.push_row(cells);
                }

                result_set
            }
            QueryResults::Boolean(answer) => {
                let mut result_set = ResultSet::new(vec![ASK_VARIABLE.to_string()]);
                result_set.push_row(vec![answer.to_string()]);
                result_set
            }
            QueryResults::Graph(triples) => {
                let mut result_set =
                    ResultSet::new(TRIPLE_VARIABLES.iter().map(|v| v.to_string()).collect());

                for triple in triples {
                    let triple = triple?;
                    let subject = Term::from(triple.subject);
                    let predicate = Term::from(triple.predicate);
                    result_set.push_row(vec![
                        cell(Some(&subject), mode, &self.marker),
                        cell(Some(&predicate), mode, &self.marker),
                        cell(Some(&triple.object), mode, &self.marker),
                    ]);
                }

                result_set
            }
        };

        tracing::debug!(
            rows = result_set.len(),
            columns = result_set.variables.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query executed"
        );

        Ok(result_set)
    }
}
