//! Conversion of Markdown documents into output files.
use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{self, Context};
use log::{error, info, warn};
use mdpdf_commonmark::{Preprocessor, extract_front_matter};
use mdpdf_config::{Config, DateLocale, DocumentOverrides};
use mdpdf_templates::EMPTY_SECTION;

use crate::{
  html::template::{SectionVars, ShellContext, render_document, render_section},
  render::{Margins, PdfEngine, RenderJob},
  utils::{document_title, directory_url, load_css, load_logo, today},
};

/// Outcome of converting several documents.
#[derive(Debug, Default)]
pub struct BatchSummary {
  /// Files that were written.
  pub converted: Vec<PathBuf>,
  /// Input files that failed, with the reason.
  pub failed:    Vec<(PathBuf, String)>,
}

impl BatchSummary {
  #[must_use]
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Converts documents with a shared configuration and output engine.
pub struct Converter<'a> {
  config: &'a Config,
  engine: &'a dyn PdfEngine,
  output: Option<PathBuf>,
  date:   String,
}

impl<'a> Converter<'a> {
  /// Create a converter dated today.
  #[must_use]
  pub fn new(config: &'a Config, engine: &'a dyn PdfEngine) -> Self {
    Self {
      config,
      engine,
      output: None,
      date: today(config.date_locale),
    }
  }

  /// Write the next documents to `output` instead of next to their source.
  #[must_use]
  pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
    self.output = output;
    self
  }

  /// Use a fixed, already formatted date for `{{DATE}}`.
  #[must_use]
  pub fn with_date<S: Into<String>>(mut self, date: S) -> Self {
    self.date = date.into();
    self
  }

  /// Convert a single Markdown file.
  ///
  /// # Arguments
  ///
  /// * `path` - The Markdown file to convert
  ///
  /// # Returns
  ///
  /// The path of the written file
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, the document's settings are
  /// invalid, its template cannot be found, or the engine fails.
  pub fn convert_document(&self, path: &Path) -> eyre::Result<PathBuf> {
    let text = fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let (overrides, body) = split_document(path, &text);
    let doc_dir = document_dir(path);

    let config = self
      .config
      .with_overrides(&overrides, &doc_dir)
      .wrap_err_with(|| format!("Invalid front matter in {}", path.display()))?;
    let template = config.resolve_template()?;

    let title = document_title(overrides.title.as_deref(), body, path);
    let vars = SectionVars {
      logo:  load_logo(config.logo.as_deref(), &template),
      date:  self.date.clone(),
      title: html_escape::encode_text(&title).into_owned(),
    };
    let header = section(config.header, &template.header_source(), &vars);
    let footer = section(config.footer, &template.footer_source(), &vars);

    let preprocessor = Preprocessor::new(config.preprocess_options(&doc_dir));
    let body_html = preprocessor.render_html(body);

    let css = load_css(config.css.as_deref(), &template);
    let base_href = directory_url(&doc_dir);
    let html = render_document(&template.document_source(), &ShellContext {
      title:     &title,
      lang:      lang_of(config.date_locale),
      css:       &css,
      body:      &body_html,
      base_href: Some(&base_href),
    })
    .wrap_err_with(|| format!("Failed to assemble {}", path.display()))?;

    let destination = self.destination(path, &doc_dir, &overrides, &config);
    let job = RenderJob {
      html,
      header,
      footer,
      show_header_footer: config.header || config.footer,
      margins: Margins::for_sections(config.header, config.footer),
      page_format: config.page_format,
      destination: destination.clone(),
    };

    self.engine.render(&job).wrap_err_with(|| {
      format!(
        "{} engine failed to write {}",
        self.engine.name(),
        destination.display()
      )
    })?;

    info!("{} -> {}", path.display(), destination.display());
    Ok(destination)
  }

  /// Convert several files one after the other.
  ///
  /// A failing document is reported and does not stop the batch.
  #[must_use]
  pub fn convert_batch(&self, files: &[PathBuf]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for file in files {
      if !file.is_file() {
        error!("File not found: {}", file.display());
        summary
          .failed
          .push((file.clone(), "file not found".to_string()));
        continue;
      }

      match self.convert_document(file) {
        Ok(destination) => summary.converted.push(destination),
        Err(e) => {
          error!("Failed to convert {}: {e:#}", file.display());
          summary.failed.push((file.clone(), format!("{e:#}")));
        },
      }
    }

    info!(
      "Converted {} of {} file(s)",
      summary.converted.len(),
      files.len()
    );
    summary
  }

  /// Output path of a document.
  ///
  /// The front matter `output` wins, relative to the document. Then the
  /// `--output` path, then the output directory or the document's own
  /// directory with the engine's extension.
  fn destination(
    &self,
    path: &Path,
    doc_dir: &Path,
    overrides: &DocumentOverrides,
    config: &Config,
  ) -> PathBuf {
    let mut destination = if let Some(ref output) = overrides.output {
      doc_dir.join(output)
    } else if let Some(ref output) = self.output {
      output.clone()
    } else {
      let stem = path.file_stem().unwrap_or(path.as_os_str());
      config
        .output_dir
        .as_deref()
        .unwrap_or(doc_dir)
        .join(stem)
    };

    if destination.extension().is_none() {
      destination.set_extension(self.engine.extension());
    }
    destination
  }
}

/// Separate the front matter from the body. Broken front matter is reported
/// and the whole text is treated as the body.
fn split_document<'t>(path: &Path, text: &'t str) -> (DocumentOverrides, &'t str) {
  match extract_front_matter(text) {
    Ok(front_matter) => {
      let overrides = DocumentOverrides::from_front_matter(&front_matter)
        .unwrap_or_else(|e| {
          warn!("Ignoring front matter of {}: {e}", path.display());
          DocumentOverrides::default()
        });
      (overrides, front_matter.body(text))
    },
    Err(e) => {
      warn!("Ignoring front matter of {}: {e}", path.display());
      (DocumentOverrides::default(), text)
    },
  }
}

fn document_dir(path: &Path) -> PathBuf {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  }
}

/// Render an enabled header or footer; disabled or blank ones print nothing.
fn section(enabled: bool, source: &str, vars: &SectionVars) -> String {
  if !enabled {
    return EMPTY_SECTION.to_string();
  }
  let rendered = render_section(source, vars);
  if rendered.trim().is_empty() {
    EMPTY_SECTION.to_string()
  } else {
    rendered
  }
}

const fn lang_of(locale: DateLocale) -> &'static str {
  match locale {
    DateLocale::Fr => "fr",
    DateLocale::En => "en",
  }
}
