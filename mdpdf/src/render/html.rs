use std::fs;

use super::{PdfEngine, RenderJob, ensure_parent};
use crate::error::MdpdfError;

/// Writes the assembled HTML document as-is.
///
/// Headers and footers are print-only and are not part of the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlEngine;

impl PdfEngine for HtmlEngine {
  fn name(&self) -> &'static str {
    "html"
  }

  fn extension(&self) -> &'static str {
    "html"
  }

  fn render(&self, job: &RenderJob) -> Result<(), MdpdfError> {
    ensure_parent(&job.destination)?;
    fs::write(&job.destination, &job.html)?;
    Ok(())
  }
}
