use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for mdpdf-config operations
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Template error: {0}")]
  Template(String),

  #[error("Template '{name}' not found (searched: {})", format_paths(.searched))]
  TemplateNotFound {
    name:     String,
    searched: Vec<PathBuf>,
  },

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Front matter error: {0}")]
  FrontMatter(#[from] mdpdf_commonmark::FrontMatterError),
}

fn format_paths(paths: &[PathBuf]) -> String {
  paths
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join(", ")
}
