//! Core implementation of the Markdown preprocessor.
//!
//! This module contains the implementation of `Preprocessor`: construction,
//! collaborator injection and the ordered transform pipeline.
use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use log::{debug, trace};
use walkdir::WalkDir;

use super::{
  alerts::render_alerts_with,
  images::embed_images_with,
  process::process_safe,
  toc::render_toc_with,
  types::{
    ComrakInline,
    FsLoader,
    InlineRenderer,
    PreprocessOptions,
    PreprocessResult,
    Preprocessor,
    ResourceLoader,
    comrak_options,
  },
};

impl Preprocessor {
  /// Create a new `Preprocessor` with the given options and the default
  /// collaborators.
  #[must_use]
  pub fn new(options: PreprocessOptions) -> Self {
    Self {
      options,
      inline: Arc::new(ComrakInline),
      loader: Arc::new(FsLoader),
    }
  }

  /// Access preprocessor options.
  #[must_use]
  pub const fn options(&self) -> &PreprocessOptions {
    &self.options
  }

  /// Set the base directory for resolving relative image paths.
  #[must_use]
  pub fn with_base_dir(mut self, base_dir: &Path) -> Self {
    self.options.base_dir = base_dir.to_path_buf();
    self
  }

  /// Replace the inline renderer used for titles and alert bodies.
  #[must_use]
  pub fn with_inline<R>(mut self, inline: R) -> Self
  where
    R: InlineRenderer + Send + Sync + 'static,
  {
    self.inline = Arc::new(inline);
    self
  }

  /// Replace the loader used to read embedded images.
  #[must_use]
  pub fn with_loader<L>(mut self, loader: L) -> Self
  where
    L: ResourceLoader + Send + Sync + 'static,
  {
    self.loader = Arc::new(loader);
    self
  }

  /// Run the text transforms over a Markdown document.
  ///
  /// Transforms run in a fixed order: image embedding, table of contents,
  /// then alerts. The alert pass sees the anchors injected by the table of
  /// contents, never the other way round.
  ///
  /// # Arguments
  ///
  /// * `markdown` - The document body, without front matter
  ///
  /// # Returns
  ///
  /// A `PreprocessResult` with the rewritten Markdown and the linked headings
  #[must_use]
  pub fn process(&self, markdown: &str) -> PreprocessResult {
    let embedded = if self.options.embed_images {
      process_safe(
        markdown,
        |text| embed_images_with(text, &self.options.base_dir, self.loader.as_ref()),
        "",
      )
    } else {
      trace!("Image embedding disabled");
      markdown.to_string()
    };

    let mut headings = Vec::new();
    let with_toc = process_safe(
      &embedded,
      |text| {
        let (out, found) = render_toc_with(
          text,
          self.options.toc_start,
          self.options.toc_depth,
          &self.options.toc_title,
          self.inline.as_ref(),
        );
        headings = found;
        out
      },
      "",
    );

    let markdown = process_safe(
      &with_toc,
      |text| render_alerts_with(text, self.inline.as_ref()),
      "",
    );

    debug!(
      "Preprocessed document: {} bytes, {} ToC entries",
      markdown.len(),
      headings.len()
    );

    PreprocessResult { markdown, headings }
  }

  /// Preprocess a document and render it to an HTML body fragment.
  #[must_use]
  pub fn render_html(&self, markdown: &str) -> String {
    let result = self.process(markdown);
    process_safe(
      &result.markdown,
      |text| comrak::markdown_to_html(text, &comrak_options()),
      "<div class=\"error\">Critical error rendering markdown content</div>",
    )
  }
}

/// Collect all Markdown files directly inside a directory, sorted by path.
///
/// Subdirectories are not visited. An unreadable directory yields an empty
/// list.
#[must_use]
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
    .min_depth(1)
    .max_depth(1)
    .into_iter()
    .filter_map(Result::ok)
    .filter(|entry| {
      entry.file_type().is_file()
        && entry.path().extension().is_some_and(|ext| ext == "md")
    })
    .map(|entry| entry.path().to_path_buf())
    .collect();

  files.sort();
  files
}
