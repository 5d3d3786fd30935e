//! Output engines turning an assembled HTML document into a file.
//!
//! [`ChromeEngine`] prints PDFs through a headless Chromium. [`HtmlEngine`]
//! writes the HTML itself, which needs no browser and is handy to inspect
//! what would be printed.
use std::path::PathBuf;

use mdpdf_config::PageFormat;

use crate::error::MdpdfError;

pub mod chrome;
pub mod html;

pub use chrome::ChromeEngine;
pub use html::HtmlEngine;

/// A CSS length, as accepted by page margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
  Px(f64),
  Mm(f64),
}

impl Length {
  /// Convert to inches, using the CSS reference of 96 pixels per inch.
  #[must_use]
  pub fn to_inches(self) -> f64 {
    match self {
      Self::Px(px) => px / 96.0,
      Self::Mm(mm) => mm / 25.4,
    }
  }
}

/// Page margins of a printed document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
  pub top:    Length,
  pub bottom: Length,
  pub left:   Length,
  pub right:  Length,
}

impl Margins {
  const HEADER_SPACE: Length = Length::Px(100.0);
  const FOOTER_SPACE: Length = Length::Px(120.0);
  const PLAIN: Length = Length::Mm(25.0);

  /// Margins leaving room for the header and footer that are printed.
  #[must_use]
  pub const fn for_sections(header: bool, footer: bool) -> Self {
    Self {
      top:    if header { Self::HEADER_SPACE } else { Self::PLAIN },
      bottom: if footer { Self::FOOTER_SPACE } else { Self::PLAIN },
      left:   Self::PLAIN,
      right:  Self::PLAIN,
    }
  }
}

/// Everything an engine needs to produce one output file.
#[derive(Debug, Clone)]
pub struct RenderJob {
  /// Complete HTML document.
  pub html:               String,
  /// Rendered header, or the empty section when disabled.
  pub header:             String,
  /// Rendered footer, or the empty section when disabled.
  pub footer:             String,
  /// Whether a header or a footer is printed at all.
  pub show_header_footer: bool,
  pub margins:            Margins,
  pub page_format:        PageFormat,
  pub destination:        PathBuf,
}

/// An output backend.
pub trait PdfEngine {
  /// Short name used in log messages.
  fn name(&self) -> &'static str;

  /// Extension of the files this engine produces.
  fn extension(&self) -> &'static str;

  /// Produce `job.destination`, creating its parent directories.
  ///
  /// # Errors
  ///
  /// Returns an error if the output cannot be produced or written.
  fn render(&self, job: &RenderJob) -> Result<(), MdpdfError>;
}

/// Create the parent directories of an output file.
pub(crate) fn ensure_parent(destination: &std::path::Path) -> Result<(), MdpdfError> {
  if let Some(parent) = destination.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent)?;
    }
  }
  Ok(())
}
