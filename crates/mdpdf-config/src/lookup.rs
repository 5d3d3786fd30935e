//! Template lookup.
//!
//! A template is a directory named after the template, holding any of
//! `header.html`, `footer.html`, `template.css`, `logo.png` and
//! `document.html`. Directories are searched in order:
//!
//! 1. `~/.mdpdf/templates/<name>/`
//! 2. `<dir>/<name>/` for every configured template directory
//! 3. `./templates/<name>/`
//!
//! The `default` template is embedded and used when no directory provides it.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{debug, warn};
use mdpdf_templates::{
  CSS_FILE,
  DEFAULT_CSS,
  DEFAULT_FOOTER,
  DEFAULT_HEADER,
  DEFAULT_TEMPLATE_NAME,
  DOCUMENT_FILE,
  DOCUMENT_SHELL,
  FOOTER_FILE,
  HEADER_FILE,
  LOGO_FILE,
};

use crate::{Config, error::ConfigError};

/// Where a template search root comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
  /// `~/.mdpdf/templates`
  User,
  /// A `template_dirs` entry of the configuration.
  Configured,
  /// `./templates`
  Project,
}

impl TemplateOrigin {
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::User => "user templates",
      Self::Configured => "configured templates",
      Self::Project => "project templates",
    }
  }
}

/// A directory searched for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
  pub origin: TemplateOrigin,
  pub path:   PathBuf,
}

/// The files of a resolved template. A `None` file is absent from the
/// template directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
  pub name:     String,
  /// Directory the template was found in; `None` for the embedded template.
  pub dir:      Option<PathBuf>,
  pub header:   Option<PathBuf>,
  pub footer:   Option<PathBuf>,
  pub css:      Option<PathBuf>,
  pub logo:     Option<PathBuf>,
  pub document: Option<PathBuf>,
}

fn existing(dir: &Path, file: &str) -> Option<PathBuf> {
  let path = dir.join(file);
  path.is_file().then_some(path)
}

fn read_optional(path: Option<&Path>) -> Option<String> {
  let path = path?;
  match fs::read_to_string(path) {
    Ok(content) => Some(content),
    Err(e) => {
      warn!("Failed to read template file {}: {e}", path.display());
      None
    },
  }
}

impl TemplateSet {
  /// The template embedded in the binary.
  #[must_use]
  pub fn builtin() -> Self {
    Self {
      name: DEFAULT_TEMPLATE_NAME.to_string(),
      ..Self::default()
    }
  }

  /// Collect the files present in a template directory.
  #[must_use]
  pub fn from_dir(name: &str, dir: &Path) -> Self {
    Self {
      name:     name.to_string(),
      dir:      Some(dir.to_path_buf()),
      header:   existing(dir, HEADER_FILE),
      footer:   existing(dir, FOOTER_FILE),
      css:      existing(dir, CSS_FILE),
      logo:     existing(dir, LOGO_FILE),
      document: existing(dir, DOCUMENT_FILE),
    }
  }

  #[must_use]
  pub const fn is_builtin(&self) -> bool {
    self.dir.is_none()
  }

  /// Header source. A template directory without `header.html` has an empty
  /// header.
  #[must_use]
  pub fn header_source(&self) -> String {
    if self.is_builtin() {
      return DEFAULT_HEADER.to_string();
    }
    read_optional(self.header.as_deref()).unwrap_or_default()
  }

  /// Footer source. A template directory without `footer.html` has an empty
  /// footer.
  #[must_use]
  pub fn footer_source(&self) -> String {
    if self.is_builtin() {
      return DEFAULT_FOOTER.to_string();
    }
    read_optional(self.footer.as_deref()).unwrap_or_default()
  }

  /// Stylesheet, falling back to the built-in one when the template has none.
  #[must_use]
  pub fn css_source(&self) -> String {
    if self.is_builtin() {
      return DEFAULT_CSS.to_string();
    }
    read_optional(self.css.as_deref()).unwrap_or_else(|| {
      warn!(
        "Template '{}' has no {CSS_FILE}, using the default style",
        self.name
      );
      DEFAULT_CSS.to_string()
    })
  }

  /// HTML document shell, falling back to the built-in one.
  #[must_use]
  pub fn document_source(&self) -> String {
    read_optional(self.document.as_deref())
      .unwrap_or_else(|| DOCUMENT_SHELL.to_string())
  }
}

/// Directory holding the user's templates, if a home directory is known.
#[must_use]
pub fn user_templates_dir() -> Option<PathBuf> {
  std::env::var_os("HOME")
    .filter(|home| !home.is_empty())
    .map(|home| PathBuf::from(home).join(".mdpdf").join("templates"))
}

impl Config {
  /// Template search roots, in lookup order.
  #[must_use]
  pub fn template_roots(&self) -> Vec<TemplateRoot> {
    let mut roots = Vec::new();
    if let Some(path) = user_templates_dir() {
      roots.push(TemplateRoot {
        origin: TemplateOrigin::User,
        path,
      });
    }
    roots.extend(self.template_dirs.iter().map(|path| {
      TemplateRoot {
        origin: TemplateOrigin::Configured,
        path:   path.clone(),
      }
    }));
    roots.push(TemplateRoot {
      origin: TemplateOrigin::Project,
      path:   PathBuf::from("templates"),
    });
    roots
  }

  /// Resolve the configured template.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::TemplateNotFound`] if no search root holds the
  /// template and it is not the built-in one.
  pub fn resolve_template(&self) -> Result<TemplateSet, ConfigError> {
    resolve_template_in(&self.template, &self.template_roots())
  }

  /// List the templates available in every search root.
  #[must_use]
  pub fn list_templates(&self) -> Vec<(TemplateRoot, Vec<String>)> {
    list_templates_in(&self.template_roots())
  }
}

/// Resolve a template by name against explicit search roots.
///
/// # Errors
///
/// Returns [`ConfigError::TemplateNotFound`] if no root holds the template
/// and it is not the built-in one.
pub fn resolve_template_in(
  name: &str,
  roots: &[TemplateRoot],
) -> Result<TemplateSet, ConfigError> {
  for root in roots {
    let dir = root.path.join(name);
    if dir.is_dir() {
      debug!("Using {} '{name}': {}", root.origin.label(), dir.display());
      return Ok(TemplateSet::from_dir(name, &dir));
    }
  }

  if name == DEFAULT_TEMPLATE_NAME {
    debug!("Using built-in template '{name}'");
    return Ok(TemplateSet::builtin());
  }

  Err(ConfigError::TemplateNotFound {
    name:     name.to_string(),
    searched: roots.iter().map(|root| root.path.join(name)).collect(),
  })
}

/// List template names (subdirectories) found in each root, sorted. Roots
/// that do not exist are skipped.
#[must_use]
pub fn list_templates_in(roots: &[TemplateRoot]) -> Vec<(TemplateRoot, Vec<String>)> {
  roots
    .iter()
    .filter_map(|root| {
      let entries = fs::read_dir(&root.path).ok()?;
      let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
      names.sort();
      Some((root.clone(), names))
    })
    .collect()
}
