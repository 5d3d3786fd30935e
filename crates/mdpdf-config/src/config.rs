use std::{
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use mdpdf_commonmark::{
  PreprocessOptions,
  processor::{DEFAULT_TOC_DEPTH, DEFAULT_TOC_START, DEFAULT_TOC_TITLE},
};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, overrides::DocumentOverrides};

/// Names of the configuration files discovered in the working directory, in
/// order of preference.
pub const CONFIG_FILENAMES: [&str; 3] = ["mdpdf.toml", "mdpdf.json", ".mdpdf.toml"];

fn default_template() -> String {
  mdpdf_templates::DEFAULT_TEMPLATE_NAME.to_string()
}

const fn default_true() -> bool {
  true
}

const fn default_toc_start() -> u8 {
  DEFAULT_TOC_START
}

const fn default_toc_depth() -> u8 {
  DEFAULT_TOC_DEPTH
}

fn default_toc_title() -> String {
  DEFAULT_TOC_TITLE.to_string()
}

/// Locale used to format the `{{DATE}}` placeholder.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
  /// `16 octobre 2026`
  #[default]
  Fr,
  /// `October 16, 2026`
  En,
}

impl FromStr for DateLocale {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "fr" | "fr-fr" => Ok(Self::Fr),
      "en" | "en-us" | "en-gb" => Ok(Self::En),
      _ => Err(ConfigError::Config(format!("Unsupported date locale: {s}"))),
    }
  }
}

/// Paper size of the generated PDF.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageFormat {
  #[default]
  #[serde(alias = "a4")]
  A4,
  #[serde(alias = "letter")]
  Letter,
}

impl PageFormat {
  /// Width and height of the page in inches.
  #[must_use]
  pub const fn dimensions_in_inches(self) -> (f64, f64) {
    match self {
      Self::A4 => (8.27, 11.69),
      Self::Letter => (8.5, 11.0),
    }
  }
}

impl FromStr for PageFormat {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "a4" => Ok(Self::A4),
      "letter" => Ok(Self::Letter),
      _ => Err(ConfigError::Config(format!("Unsupported page format: {s}"))),
    }
  }
}

/// Configuration for the mdpdf converter.
///
/// [`Config`] holds every option controlling a conversion: the template, the
/// header and footer toggles, table of contents levels and output location.
/// Fields are typically loaded from a TOML or JSON config file, then refined
/// by CLI arguments and finally by each document's front matter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Name of the template to use.
  #[serde(default = "default_template")]
  pub template: String,

  /// Additional directories searched for templates.
  pub template_dirs: Vec<PathBuf>,

  /// Whether the page header is printed.
  #[serde(default = "default_true")]
  pub header: bool,

  /// Whether the page footer is printed.
  #[serde(default = "default_true")]
  pub footer: bool,

  /// Stylesheet overriding the template's `template.css`.
  pub css: Option<PathBuf>,

  /// Logo overriding the template's `logo.png`.
  pub logo: Option<PathBuf>,

  /// Directory receiving generated files. Defaults to each document's
  /// directory.
  pub output_dir: Option<PathBuf>,

  /// First heading level collected into the table of contents.
  #[serde(default = "default_toc_start")]
  pub toc_start: u8,

  /// Last heading level collected into the table of contents.
  #[serde(default = "default_toc_depth")]
  pub toc_depth: u8,

  /// Label of the table of contents.
  #[serde(default = "default_toc_title")]
  pub toc_title: String,

  /// Whether local images are embedded as data URIs.
  #[serde(default = "default_true")]
  pub embed_images: bool,

  /// Locale of the `{{DATE}}` placeholder.
  pub date_locale: DateLocale,

  /// Paper size.
  pub page_format: PageFormat,
}

/// The keys set by a single configuration file.
///
/// Unlike [`Config`], nothing is defaulted: a key missing from the file stays
/// `None`, so merging the layer leaves the current value alone.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigLayer {
  pub template:      Option<String>,
  pub template_dirs: Option<Vec<PathBuf>>,
  pub header:        Option<bool>,
  pub footer:        Option<bool>,
  pub css:           Option<PathBuf>,
  pub logo:          Option<PathBuf>,
  pub output_dir:    Option<PathBuf>,
  pub toc_start:     Option<u8>,
  pub toc_depth:     Option<u8>,
  pub toc_title:     Option<String>,
  pub embed_images:  Option<bool>,
  pub date_locale:   Option<DateLocale>,
  pub page_format:   Option<PageFormat>,
}

impl ConfigLayer {
  /// Read the keys of a configuration file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match extension.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse JSON config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse TOML config from {}: {}",
            path.display(),
            e
          ))
        })
      },
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      template:      default_template(),
      template_dirs: Vec::new(),
      header:        true,
      footer:        true,
      css:           None,
      logo:          None,
      output_dir:    None,
      toc_start:     DEFAULT_TOC_START,
      toc_depth:     DEFAULT_TOC_DEPTH,
      toc_title:     default_toc_title(),
      embed_images:  true,
      date_locale:   DateLocale::default(),
      page_format:   PageFormat::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// Keys the file does not set keep their default value.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    config.merge(ConfigLayer::from_file(path)?);
    Ok(config)
  }

  /// Load configuration from explicit or discovered files, then apply
  /// `KEY=VALUE` overrides.
  ///
  /// Explicit files are merged in order, later files taking precedence. When
  /// none is given, a config file in the working directory is used if one
  /// exists; otherwise the defaults apply.
  ///
  /// # Errors
  ///
  /// Returns an error if a config file cannot be loaded, an override is
  /// malformed, or the resulting configuration is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        Self::from_file(&discovered)?
      } else {
        Self::default()
      }
    } else {
      let mut merged = Self::default();
      for path in config_files {
        merged.merge(ConfigLayer::from_file(path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
      merged
    };

    config.apply_overrides(config_overrides)?;
    config.validate()?;
    Ok(config)
  }

  /// Search for a config file in the working directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search for a config file in the given directory.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|name| dir.join(name))
      .find(|path| path.is_file())
  }

  /// Merge a config file layer into this config.
  ///
  /// # Merge Rules
  ///
  /// - Keys the layer does not set leave this config untouched
  /// - `template_dirs` entries are appended to this config's
  /// - Any other key set by the layer replaces this config's value
  pub fn merge(&mut self, layer: ConfigLayer) {
    if let Some(template) = layer.template {
      self.template = template;
    }
    if let Some(template_dirs) = layer.template_dirs {
      self.template_dirs.extend(template_dirs);
    }
    if let Some(header) = layer.header {
      self.header = header;
    }
    if let Some(footer) = layer.footer {
      self.footer = footer;
    }
    if layer.css.is_some() {
      self.css = layer.css;
    }
    if layer.logo.is_some() {
      self.logo = layer.logo;
    }
    if layer.output_dir.is_some() {
      self.output_dir = layer.output_dir;
    }
    if let Some(toc_start) = layer.toc_start {
      self.toc_start = toc_start;
    }
    if let Some(toc_depth) = layer.toc_depth {
      self.toc_depth = toc_depth;
    }
    if let Some(toc_title) = layer.toc_title {
      self.toc_title = toc_title;
    }
    if let Some(embed_images) = layer.embed_images {
      self.embed_images = embed_images;
    }
    if let Some(date_locale) = layer.date_locale {
      self.date_locale = date_locale;
    }
    if let Some(page_format) = layer.page_format {
      self.page_format = page_format;
    }
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override. An empty value resets optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is unknown or the value does not parse.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    let optional_path = |value: &str| {
      (!value.is_empty()).then(|| PathBuf::from(value))
    };

    match key {
      "template" => value.clone_into(&mut self.template),
      "template_dirs" => {
        self.template_dirs = value
          .split(',')
          .map(str::trim)
          .filter(|s| !s.is_empty())
          .map(PathBuf::from)
          .collect();
      },
      "header" => self.header = parse_value(key, value)?,
      "footer" => self.footer = parse_value(key, value)?,
      "css" => self.css = optional_path(value),
      "logo" => self.logo = optional_path(value),
      "output_dir" => self.output_dir = optional_path(value),
      "toc_start" => self.toc_start = parse_value(key, value)?,
      "toc_depth" => self.toc_depth = parse_value(key, value)?,
      "toc_title" => value.clone_into(&mut self.toc_title),
      "embed_images" => self.embed_images = parse_value(key, value)?,
      "date_locale" => self.date_locale = value.parse()?,
      "page_format" => self.page_format = value.parse()?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override: {key}={value}");
    Ok(())
  }

  /// Check value ranges.
  ///
  /// An inverted table of contents range is accepted with a warning: the
  /// marker is then simply removed from documents.
  ///
  /// # Errors
  ///
  /// Returns an error if a heading level is outside 1-6 or the template name
  /// is empty.
  pub fn validate(&self) -> Result<(), ConfigError> {
    for (key, level) in [("toc_start", self.toc_start), ("toc_depth", self.toc_depth)]
    {
      if !(1..=6).contains(&level) {
        return Err(ConfigError::Config(format!(
          "{key} must be a heading level between 1 and 6, got {level}"
        )));
      }
    }

    if self.toc_start > self.toc_depth {
      log::warn!(
        "toc_start ({}) is greater than toc_depth ({}); tables of contents \
         will be empty",
        self.toc_start,
        self.toc_depth
      );
    }

    if self.template.trim().is_empty() {
      return Err(ConfigError::Config(
        "Template name must not be empty".to_string(),
      ));
    }

    Ok(())
  }

  /// Derive the configuration of a single document from its front matter.
  ///
  /// Relative `css` and `logo` paths in the front matter are resolved
  /// against `base_dir`, the document's directory.
  ///
  /// # Errors
  ///
  /// Returns an error if the resulting configuration is invalid.
  pub fn with_overrides(
    &self,
    overrides: &DocumentOverrides,
    base_dir: &Path,
  ) -> Result<Self, ConfigError> {
    let mut config = self.clone();

    if let Some(ref template) = overrides.template {
      config.template.clone_from(template);
    }
    if let Some(header) = overrides.header {
      config.header = header;
    }
    if let Some(footer) = overrides.footer {
      config.footer = footer;
    }
    if let Some(toc_start) = overrides.toc_start {
      config.toc_start = toc_start;
    }
    if let Some(toc_depth) = overrides.toc_depth {
      config.toc_depth = toc_depth;
    }
    if let Some(ref toc_title) = overrides.toc_title {
      config.toc_title.clone_from(toc_title);
    }
    if let Some(ref css) = overrides.css {
      config.css = Some(base_dir.join(css));
    }
    if let Some(ref logo) = overrides.logo {
      config.logo = Some(base_dir.join(logo));
    }

    config.validate()?;
    Ok(config)
  }

  /// Build the preprocessing options for a document living in `base_dir`.
  #[must_use]
  pub fn preprocess_options(&self, base_dir: &Path) -> PreprocessOptions {
    PreprocessOptions::builder()
      .toc_range(self.toc_start, self.toc_depth)
      .toc_title(self.toc_title.clone())
      .embed_images(self.embed_images)
      .base_dir(base_dir)
      .build()
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the template cannot be retrieved or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Export the built-in template to a directory for customization
  ///
  /// # Errors
  ///
  /// Returns an error if the output directory cannot be created or a template
  /// file cannot be written.
  pub fn export_templates(
    output_dir: &Path,
    force: bool,
  ) -> Result<Vec<PathBuf>, ConfigError> {
    fs::create_dir_all(output_dir).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to create template directory: {}: {}",
        output_dir.display(),
        e
      ))
    })?;

    let mut templates: Vec<_> = mdpdf_templates::all_templates().into_iter().collect();
    templates.sort_unstable_by_key(|(name, _)| *name);

    let mut written = Vec::new();
    for (filename, content) in templates {
      let file_path = output_dir.join(filename);

      if file_path.exists() && !force {
        log::warn!(
          "File {} already exists. Use --force to overwrite.",
          file_path.display()
        );
        continue;
      }

      fs::write(&file_path, content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to write template file: {}: {}",
          file_path.display(),
          e
        ))
      })?;
      log::info!("Exported template: {}", file_path.display());
      written.push(file_path);
    }

    Ok(written)
  }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
  T::Err: std::fmt::Display,
{
  value.parse().map_err(|e| {
    ConfigError::Config(format!("Invalid value '{value}' for '{key}': {e}"))
  })
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::unwrap_used,
    clippy::field_reassign_with_default,
    reason = "Fine in tests"
  )]

  use std::fs;

  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.template, "default");
    assert!(config.header);
    assert!(config.footer);
    assert_eq!(config.toc_start, 1);
    assert_eq!(config.toc_depth, 3);
    assert_eq!(config.toc_title, "Table of contents");
    assert_eq!(config.date_locale, DateLocale::Fr);
    assert_eq!(config.page_format, PageFormat::A4);
    config.validate().unwrap();
  }

  #[test]
  fn test_partial_toml_keeps_defaults() {
    let config: Config = toml::from_str("toc_depth = 2\nheader = false\n").unwrap();
    assert_eq!(config.toc_depth, 2);
    assert!(!config.header);
    assert!(config.footer);
    assert_eq!(config.template, "default");
  }

  #[test]
  fn test_from_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("mdpdf.toml");
    fs::write(&toml_path, "template = \"qualiopi\"\npage_format = \"Letter\"\n")
      .unwrap();
    let config = Config::from_file(&toml_path).unwrap();
    assert_eq!(config.template, "qualiopi");
    assert_eq!(config.page_format, PageFormat::Letter);

    let json_path = dir.path().join("mdpdf.json");
    fs::write(&json_path, r#"{"date_locale": "en", "footer": false}"#).unwrap();
    let config = Config::from_file(&json_path).unwrap();
    assert_eq!(config.date_locale, DateLocale::En);
    assert!(!config.footer);

    let yaml_path = dir.path().join("mdpdf.yaml");
    fs::write(&yaml_path, "template: x").unwrap();
    assert!(Config::from_file(&yaml_path).is_err());
  }

  #[test]
  fn test_find_config_file_preference() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::find_config_file_in(dir.path()).is_none());

    fs::write(dir.path().join(".mdpdf.toml"), "").unwrap();
    fs::write(dir.path().join("mdpdf.json"), "{}").unwrap();
    assert_eq!(
      Config::find_config_file_in(dir.path()),
      Some(dir.path().join("mdpdf.json"))
    );
  }

  #[test]
  fn test_load_merges_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let extra = dir.path().join("extra.toml");
    fs::write(&base, "template_dirs = [\"a\"]\ncss = \"base.css\"\n").unwrap();
    fs::write(&extra, "template_dirs = [\"b\"]\ntoc_depth = 4\n").unwrap();

    let config = Config::load(&[base, extra], &[]).unwrap();
    assert_eq!(config.template_dirs, vec![
      PathBuf::from("a"),
      PathBuf::from("b")
    ]);
    // Option fields survive a later file that leaves them unset.
    assert_eq!(config.css, Some(PathBuf::from("base.css")));
    assert_eq!(config.toc_depth, 4);
  }

  #[test]
  fn test_later_file_keeps_unmentioned_plain_keys() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let extra = dir.path().join("extra.json");
    fs::write(
      &base,
      "header = false
toc_depth = 2
date_locale = \"en\"
template = \"brand\"
",
    )
    .unwrap();
    fs::write(&extra, r#"{ "template_dirs": ["more"], "footer": false }"#).unwrap();

    let config = Config::load(&[base, extra], &[]).unwrap();
    assert!(!config.header);
    assert!(!config.footer);
    assert_eq!(config.toc_depth, 2);
    assert_eq!(config.date_locale, DateLocale::En);
    assert_eq!(config.template, "brand");
    assert_eq!(config.template_dirs, vec![PathBuf::from("more")]);
    assert_eq!(config.toc_title, Config::default().toc_title);
  }

  #[test]
  fn test_merge_layer_only_sets_present_keys() {
    let mut config = Config {
      toc_start: 2,
      page_format: PageFormat::Letter,
      ..Config::default()
    };
    config.merge(ConfigLayer {
      toc_depth: Some(5),
      ..ConfigLayer::default()
    });
    assert_eq!(config.toc_start, 2);
    assert_eq!(config.toc_depth, 5);
    assert_eq!(config.page_format, PageFormat::Letter);
  }

  #[test]
  fn test_overrides() {
    let mut config = Config::default();
    config
      .apply_overrides(&[
        "template=qualiopi".to_string(),
        "header=false".to_string(),
        "toc_depth=2".to_string(),
        "output_dir=out".to_string(),
        "page_format=letter".to_string(),
      ])
      .unwrap();
    assert_eq!(config.template, "qualiopi");
    assert!(!config.header);
    assert_eq!(config.toc_depth, 2);
    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    assert_eq!(config.page_format, PageFormat::Letter);

    config.apply_override("output_dir", "").unwrap();
    assert_eq!(config.output_dir, None);
  }

  #[test]
  fn test_invalid_overrides() {
    let mut config = Config::default();
    assert!(config.apply_overrides(&["no_equals".to_string()]).is_err());
    assert!(config.apply_override("unknown", "1").is_err());
    assert!(config.apply_override("toc_start", "deep").is_err());
    assert!(config.apply_override("date_locale", "de").is_err());
  }

  #[test]
  fn test_validate_levels() {
    let mut config = Config::default();
    config.toc_depth = 7;
    assert!(config.validate().is_err());

    config.toc_depth = 0;
    assert!(config.validate().is_err());

    // Inverted ranges are accepted.
    config.toc_start = 4;
    config.toc_depth = 2;
    config.validate().unwrap();
  }

  #[test]
  fn test_with_overrides_resolves_paths() {
    let overrides = DocumentOverrides {
      template: Some("qualiopi".into()),
      footer: Some(false),
      toc_title: Some("Sommaire".into()),
      css: Some(PathBuf::from("style.css")),
      ..Default::default()
    };

    let config = Config::default()
      .with_overrides(&overrides, Path::new("/docs"))
      .unwrap();
    assert_eq!(config.template, "qualiopi");
    assert!(config.header);
    assert!(!config.footer);
    assert_eq!(config.toc_title, "Sommaire");
    assert_eq!(config.css, Some(PathBuf::from("/docs/style.css")));
  }

  #[test]
  fn test_with_overrides_rejects_invalid_levels() {
    let overrides = DocumentOverrides {
      toc_depth: Some(9),
      ..Default::default()
    };
    assert!(Config::default()
      .with_overrides(&overrides, Path::new("."))
      .is_err());
  }

  #[test]
  fn test_preprocess_options() {
    let mut config = Config::default();
    config.toc_start = 2;
    config.embed_images = false;
    let options = config.preprocess_options(Path::new("/docs"));
    assert_eq!(options.toc_start, 2);
    assert_eq!(options.toc_depth, 3);
    assert!(!options.embed_images);
    assert_eq!(options.base_dir, PathBuf::from("/docs"));
  }

  #[test]
  fn test_export_templates_respects_force() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("default");

    let written = Config::export_templates(&target, false).unwrap();
    assert_eq!(written.len(), 4);
    assert!(target.join("template.css").is_file());

    fs::write(target.join("header.html"), "custom").unwrap();
    let written = Config::export_templates(&target, false).unwrap();
    assert!(written.is_empty());
    assert_eq!(fs::read_to_string(target.join("header.html")).unwrap(), "custom");

    let written = Config::export_templates(&target, true).unwrap();
    assert_eq!(written.len(), 4);
  }

  #[test]
  fn test_page_dimensions() {
    assert_eq!(PageFormat::A4.dimensions_in_inches(), (8.27, 11.69));
    assert_eq!(PageFormat::Letter.dimensions_in_inches(), (8.5, 11.0));
  }
}
