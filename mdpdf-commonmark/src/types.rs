//! Types for mdpdf-commonmark public API and internal use.
use serde::{Deserialize, Serialize};

/// A heading found by the heading scanner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading level (1-6).
  pub level: u8,
  /// Raw heading title, before any inline rendering.
  pub title: String,
  /// Anchor ID, unique within the document.
  pub slug:  String,
  /// Zero-based index of the heading line in the scanned text.
  pub line:  usize,
}

/// The kind of a GitHub-style alert block.
///
/// `INFO` and `DANGER` markers resolve to [`AlertKind::Note`] and
/// [`AlertKind::Caution`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
  Note,
  Tip,
  Important,
  Warning,
  Caution,
}

impl AlertKind {
  /// Resolve an alert marker word, case-insensitively.
  #[must_use]
  pub fn from_marker(marker: &str) -> Option<Self> {
    match marker.to_ascii_lowercase().as_str() {
      "note" | "info" => Some(Self::Note),
      "tip" => Some(Self::Tip),
      "important" => Some(Self::Important),
      "warning" => Some(Self::Warning),
      "caution" | "danger" => Some(Self::Caution),
      _ => None,
    }
  }

  /// CSS class applied to the alert container, next to `markdown-alert`.
  #[must_use]
  pub const fn css_class(self) -> &'static str {
    match self {
      Self::Note => "markdown-alert-note",
      Self::Tip => "markdown-alert-tip",
      Self::Important => "markdown-alert-important",
      Self::Warning => "markdown-alert-warning",
      Self::Caution => "markdown-alert-caution",
    }
  }

  /// Title shown when the alert has no custom title.
  #[must_use]
  pub const fn display_title(self) -> &'static str {
    match self {
      Self::Note => "Note",
      Self::Tip => "Tip",
      Self::Important => "Important",
      Self::Warning => "Warning",
      Self::Caution => "Caution",
    }
  }

  #[must_use]
  pub const fn icon(self) -> &'static str {
    match self {
      Self::Note => "ℹ️",
      Self::Tip => "💡",
      Self::Important => "❗",
      Self::Warning => "⚠️",
      Self::Caution => "🛑",
    }
  }
}

/// A matched alert block, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertBlock {
  pub kind:         AlertKind,
  /// Text following the marker on the opening line, if any.
  pub custom_title: Option<String>,
  /// Paragraphs of the body, each already joined into a single line.
  pub paragraphs:   Vec<String>,
}

/// A local image reference found in Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
  pub alt_text: String,
  pub path:     String,
}
