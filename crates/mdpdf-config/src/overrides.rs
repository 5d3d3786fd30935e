//! Per-document settings read from YAML front matter.
use std::path::PathBuf;

use mdpdf_commonmark::FrontMatter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings a document may override through its front matter.
///
/// Every field is optional and unknown keys are ignored, so front matter
/// written for other tools does not break a conversion.
///
/// ```yaml
/// ---
/// title: Rapport annuel
/// template: qualiopi
/// footer: false
/// toc_depth: 2
/// ---
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentOverrides {
  /// Document title, exposed to headers and footers as `{{TITLE}}`.
  pub title:     Option<String>,
  pub template:  Option<String>,
  pub header:    Option<bool>,
  pub footer:    Option<bool>,
  pub toc_start: Option<u8>,
  pub toc_depth: Option<u8>,
  pub toc_title: Option<String>,
  /// Stylesheet, relative to the document.
  pub css:       Option<PathBuf>,
  /// Logo, relative to the document.
  pub logo:      Option<PathBuf>,
  /// Output path, relative to the document.
  pub output:    Option<PathBuf>,
}

impl DocumentOverrides {
  /// Read the overrides out of parsed front matter.
  ///
  /// # Errors
  ///
  /// Returns an error if a known key carries a value of the wrong type.
  pub fn from_front_matter(front_matter: &FrontMatter) -> Result<Self, ConfigError> {
    if front_matter.is_empty() {
      return Ok(Self::default());
    }
    Ok(front_matter.deserialize()?)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use mdpdf_commonmark::extract_front_matter;

  use super::*;

  #[test]
  fn test_from_front_matter() {
    let fm = extract_front_matter(
      "---\ntitle: Rapport\ntemplate: qualiopi\nfooter: false\ntoc_depth: \
       2\nauthor: ignored\n---\nBody",
    )
    .unwrap();
    let overrides = DocumentOverrides::from_front_matter(&fm).unwrap();
    assert_eq!(overrides.title.as_deref(), Some("Rapport"));
    assert_eq!(overrides.template.as_deref(), Some("qualiopi"));
    assert_eq!(overrides.footer, Some(false));
    assert_eq!(overrides.header, None);
    assert_eq!(overrides.toc_depth, Some(2));
  }

  #[test]
  fn test_empty_front_matter() {
    let fm = extract_front_matter("# No front matter").unwrap();
    assert_eq!(
      DocumentOverrides::from_front_matter(&fm).unwrap(),
      DocumentOverrides::default()
    );
  }

  #[test]
  fn test_wrong_type_is_an_error() {
    let fm = extract_front_matter("---\nheader: [1, 2]\n---\n").unwrap();
    assert!(DocumentOverrides::from_front_matter(&fm).is_err());
  }
}
