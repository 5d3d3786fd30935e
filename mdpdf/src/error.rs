use std::io;

use thiserror::Error;

/// Top-level error type for the mdpdf crate.
#[derive(Debug, Error)]
pub enum MdpdfError {
  #[error("Configuration error: {0}")]
  Config(#[from] mdpdf_config::ConfigError),

  #[error("Template error: {0}")]
  Template(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Browser error: {0}")]
  Browser(String),

  #[error("Rendering error: {0}")]
  Render(String),
}

impl From<tera::Error> for MdpdfError {
  fn from(e: tera::Error) -> Self {
    // Tera keeps the useful part of the message in the source chain.
    let mut message = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(inner) = source {
      message.push_str(": ");
      message.push_str(&inner.to_string());
      source = inner.source();
    }
    Self::Template(message)
  }
}
