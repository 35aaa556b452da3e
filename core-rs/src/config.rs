/**
 * config.rs
 * Parser for qoyllur.yaml (YAML format)
 *
 * Format:
 * ```yaml
 * ontology: qoyllurity.ttl
 * namespaceMarker: "festividades#"
 * bind: 127.0.0.1:8501
 * csvFilename: resultados.csv
 * ```
 *
 * Every key is optional; missing keys fall back to the defaults below.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::errors::ExplorerError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "qoyllur.yaml";

/// Turtle file loaded when nothing else is configured
pub const DEFAULT_ONTOLOGY: &str = "qoyllurity.ttl";

/// Substring marking IRIs of the festival namespace
pub const DEFAULT_NAMESPACE_MARKER: &str = "festividades#";

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

pub const DEFAULT_CSV_FILENAME: &str = "resultados.csv";

/// qoyllur.yaml file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExplorerConfig {
    /// Turtle file with the festival ontology
    pub ontology: PathBuf,
    /// Namespace marker used when shortening identifiers for display
    pub namespace_marker: String,
    /// Address the web page listens on
    pub bind: String,
    /// File name offered for CSV downloads
    pub csv_filename: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            ontology: PathBuf::from(DEFAULT_ONTOLOGY),
            namespace_marker: DEFAULT_NAMESPACE_MARKER.to_string(),
            bind: DEFAULT_BIND.to_string(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from the given YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExplorerError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExplorerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let content = fs::read_to_string(path)?;
        let config: ExplorerConfig = serde_yaml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded explorer config");
        Ok(config)
    }

    /// Load `qoyllur.yaml` from `dir` if present, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Result<Self, ExplorerError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate field contents
    ///
    /// Ensures:
    /// - ontology path is non-empty
    /// - namespace marker is non-empty
    /// - bind parses as a socket address
    pub fn validate(&self) -> Result<(), ExplorerError> {
        if self.ontology.as_os_str().is_empty() {
            return Err(ExplorerError::ValidationError(
                "ontology path cannot be empty".to_string(),
            ));
        }

        if self.namespace_marker.is_empty() {
            return Err(ExplorerError::ValidationError(
                "namespaceMarker cannot be empty".to_string(),
            ));
        }

        self.bind_addr()?;

        if self.csv_filename.trim().is_empty() {
            return Err(ExplorerError::ValidationError(
                "csvFilename cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ExplorerError> {
        self.bind.parse().map_err(|e| {
            ExplorerError::ValidationError(format!("Invalid bind address '{}': {}", self.bind, e))
        })
    }
}
