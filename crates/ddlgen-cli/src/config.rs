//! Configuration file handling

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for ddlgen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// DDL file paths
    #[serde(default)]
    pub schema: Vec<String>,

    /// Directory containing DDL files
    pub schema_dir: Option<String>,

    /// Output directory for generated documents
    pub out_dir: Option<String>,

    /// Generated-at string stamped into documents
    pub timestamp: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Config = toml::from_str(&contents).into_diagnostic()?;
        Ok(config)
    }

    /// Try to find and load ddlgen.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join("ddlgen.toml");
            if config_path.exists() {
                return Ok(Some(Self::from_file(&config_path)?));
            }

            // Try parent directory
            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(
        mut self,
        files: &[PathBuf],
        schema_dir: &Option<PathBuf>,
        out_dir: &Option<PathBuf>,
        timestamp: &Option<String>,
    ) -> Self {
        if !files.is_empty() {
            self.schema = files.iter().map(|p| p.display().to_string()).collect();
        }

        if schema_dir.is_some() {
            self.schema_dir = schema_dir.as_ref().map(|p| p.display().to_string());
        }

        if out_dir.is_some() {
            self.out_dir = out_dir.as_ref().map(|p| p.display().to_string());
        }

        if timestamp.is_some() {
            self.timestamp = timestamp.clone();
        }

        self
    }
}
