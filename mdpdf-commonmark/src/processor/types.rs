//! Type definitions for the Markdown preprocessor.
//!
//! Contains the configuration (`PreprocessOptions`), the preprocessor itself
//! (`Preprocessor`) and the two collaborator seams the transforms rely on:
//! inline rendering (`InlineRenderer`) and resource loading
//! (`ResourceLoader`).
//!
//! # Examples
//!
//! ```
//! use mdpdf_commonmark::{PreprocessOptions, Preprocessor};
//!
//! let options = PreprocessOptions::builder()
//!   .toc_range(2, 4)
//!   .embed_images(false)
//!   .build();
//!
//! let preprocessor = Preprocessor::new(options);
//! ```

use std::{
  fs,
  io,
  path::{Path, PathBuf},
  sync::{Arc, LazyLock},
};

use comrak::options::Options;
use regex::Regex;

use crate::utils::never_matching_regex;

/// Default first heading level collected into the table of contents.
pub const DEFAULT_TOC_START: u8 = 1;

/// Default last heading level collected into the table of contents.
pub const DEFAULT_TOC_DEPTH: u8 = 3;

/// Default label of the table of contents container.
pub const DEFAULT_TOC_TITLE: &str = "Table of contents";

/// Options for configuring the preprocessing pipeline.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
  /// First heading level included in the table of contents.
  pub toc_start: u8,

  /// Last heading level included in the table of contents.
  pub toc_depth: u8,

  /// Label rendered at the top of the table of contents.
  pub toc_title: String,

  /// Whether local images are embedded as data URIs.
  pub embed_images: bool,

  /// Directory relative image paths are resolved against.
  pub base_dir: PathBuf,
}

impl PreprocessOptions {
  /// Start building options from the defaults.
  #[must_use]
  pub fn builder() -> PreprocessOptionsBuilder {
    PreprocessOptionsBuilder::new()
  }
}

impl Default for PreprocessOptions {
  fn default() -> Self {
    Self {
      toc_start:    DEFAULT_TOC_START,
      toc_depth:    DEFAULT_TOC_DEPTH,
      toc_title:    DEFAULT_TOC_TITLE.to_string(),
      embed_images: true,
      base_dir:     PathBuf::from("."),
    }
  }
}

/// Builder for constructing `PreprocessOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct PreprocessOptionsBuilder {
  options: PreprocessOptions,
}

impl PreprocessOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the inclusive heading level range of the table of contents.
  #[must_use]
  pub const fn toc_range(mut self, start: u8, depth: u8) -> Self {
    self.options.toc_start = start;
    self.options.toc_depth = depth;
    self
  }

  /// Set the label of the table of contents.
  #[must_use]
  pub fn toc_title<S: Into<String>>(mut self, title: S) -> Self {
    self.options.toc_title = title.into();
    self
  }

  /// Enable or disable image embedding.
  #[must_use]
  pub const fn embed_images(mut self, enabled: bool) -> Self {
    self.options.embed_images = enabled;
    self
  }

  /// Set the directory relative image paths are resolved against.
  #[must_use]
  pub fn base_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
    self.options.base_dir = dir.into();
    self
  }

  /// Build the final `PreprocessOptions`.
  #[must_use]
  pub fn build(self) -> PreprocessOptions {
    self.options
  }
}

/// Markdown preprocessor running the text transforms in order.
///
/// Can be cheaply cloned since collaborators are held behind `Arc`.
#[derive(Clone)]
pub struct Preprocessor {
  pub(crate) options: PreprocessOptions,
  pub(crate) inline:  Arc<dyn InlineRenderer + Send + Sync>,
  pub(crate) loader:  Arc<dyn ResourceLoader + Send + Sync>,
}

/// Result of preprocessing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessResult {
  /// Markdown with HTML fragments injected, ready for rendering.
  pub markdown: String,

  /// Headings collected for the table of contents. Empty when the document
  /// has no `[[toc]]` marker.
  pub headings: Vec<crate::Heading>,
}

/// Trait for rendering inline Markdown (emphasis, code spans, links) to HTML.
///
/// Implementations must not produce block-level elements.
pub trait InlineRenderer {
  fn render_inline(&self, fragment: &str) -> String;
}

/// Inline renderer backed by comrak.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakInline;

static BLOCK_START_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?:#{1,6}(?:\s|$)|[-+*](?:\s|$)|>|(?:[-*_]\s*){3,}$|`{3,}|~{3,}|\[[^\]]+\]:)",
  )
    .unwrap_or_else(|e| {
      log::error!("Failed to compile BLOCK_START_RE regex: {e}");
      never_matching_regex()
    })
});

static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(\d{1,9})([.)])").unwrap_or_else(|e| {
    log::error!("Failed to compile LIST_MARKER_RE regex: {e}");
    never_matching_regex()
  })
});

impl ComrakInline {
  /// Escape constructs that would make comrak open a block instead of a
  /// paragraph: headings, quotes, list markers, thematic breaks, code fences
  /// and link reference definitions.
  fn neutralize_block_start(fragment: &str) -> String {
    let trimmed = fragment.trim();
    if BLOCK_START_RE.is_match(trimmed) {
      return format!("\\{trimmed}");
    }
    LIST_MARKER_RE.replace(trimmed, "$1\\$2").into_owned()
  }
}

impl InlineRenderer for ComrakInline {
  fn render_inline(&self, fragment: &str) -> String {
    let source = Self::neutralize_block_start(fragment);
    if source.is_empty() {
      return String::new();
    }

    let html = comrak::markdown_to_html(&source, &comrak_options());
    let html = html.trim_end();
    if let Some(inner) = html
      .strip_prefix("<p>")
      .and_then(|inner| inner.strip_suffix("</p>"))
      .filter(|inner| !inner.contains("<p>"))
    {
      return inner.to_string();
    }

    // Raw HTML is passed through on purpose.
    if source.starts_with('<') && !html.is_empty() {
      return html.to_string();
    }

    // Anything else opened a block and may have swallowed the text.
    log::debug!("Inline fragment did not render as a paragraph: {source}");
    html_escape::encode_text(fragment.trim()).into_owned()
  }
}

/// Trait for locating and reading resources referenced by a document.
pub trait ResourceLoader {
  /// Resolve `path` against `base_dir`. Absolute paths are kept as-is.
  fn resolve(&self, base_dir: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
      candidate.to_path_buf()
    } else {
      base_dir.join(candidate)
    }
  }

  /// Read the resource at an already resolved path.
  ///
  /// # Errors
  ///
  /// Returns an error if the resource does not exist or cannot be read.
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Resource loader reading from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ResourceLoader for FsLoader {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
  }
}

/// Build the comrak options shared by inline and document rendering.
///
/// Raw HTML must pass through untouched since the transforms inject it.
#[must_use]
pub fn comrak_options() -> Options<'static> {
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.footnotes = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.extension.autolink = true;
  options.render.r#unsafe = true;
  options.extension.header_ids = None;
  options
}
