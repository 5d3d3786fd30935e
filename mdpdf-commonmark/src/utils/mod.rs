pub mod codeblock;

use std::{
  collections::{HashMap, HashSet},
  sync::LazyLock,
};

use regex::Regex;

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
    log::error!("Failed to compile HTML_TAG_RE regex: {e}");
    never_matching_regex()
  })
});

/// Remove HTML tags from a string, keeping the text between them.
#[must_use]
pub fn strip_html_tags(text: &str) -> String {
  HTML_TAG_RE.replace_all(text, "").into_owned()
}

/// Slugify a heading title for use as an anchor ID.
///
/// The title is lowercased and stripped of HTML tags. Only letters, digits,
/// whitespace and hyphens survive; every run of whitespace and hyphens becomes
/// a single hyphen, and hyphens are trimmed from both ends.
///
/// The result is empty when the title holds no letter or digit.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();
  let plain = strip_html_tags(&lowered);

  let mut slug = String::with_capacity(plain.len());
  let mut pending_hyphen = false;
  for c in plain.chars() {
    if c.is_alphanumeric() {
      if pending_hyphen && !slug.is_empty() {
        slug.push('-');
      }
      pending_hyphen = false;
      slug.push(c);
    } else if c.is_whitespace() || c == '-' {
      pending_hyphen = true;
    }
  }
  slug
}

/// Per-document table of issued anchor IDs.
///
/// The first heading with a given base slug keeps it unsuffixed, later ones
/// get `-2`, `-3`, ... appended. Suffixed IDs are also checked against every
/// ID already issued, so a literal "Setup 2" heading can never collide with
/// the second "Setup".
#[derive(Debug, Default, Clone)]
pub struct SlugRegistry {
  counts: HashMap<String, usize>,
  issued: HashSet<String>,
}

impl SlugRegistry {
  /// Create an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Issue the anchor ID for a heading.
  ///
  /// `position` is the 1-based position of the heading among the headings
  /// registered in this pass. Titles that slugify to nothing fall back to
  /// `section-<position>`.
  pub fn next_slug(&mut self, title: &str, position: usize) -> String {
    let mut base = slugify(title);
    if base.is_empty() {
      base = format!("section-{position}");
    }

    let count = self.counts.entry(base.clone()).or_insert(0);
    *count += 1;
    let mut candidate = if *count == 1 {
      base.clone()
    } else {
      format!("{base}-{count}")
    };
    while self.issued.contains(&candidate) {
      *count += 1;
      candidate = format!("{base}-{count}");
    }

    self.issued.insert(candidate.clone());
    candidate
  }
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Both patterns are known to be valid")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| Regex::new(r"^\b$").unwrap())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_slugify_basic() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("  Getting   Started  "), "getting-started");
  }

  #[test]
  fn test_slugify_strips_html_and_punctuation() {
    assert_eq!(slugify("The <em>quick</em> fox!"), "the-quick-fox");
    assert_eq!(slugify("TypeScript & JSX"), "typescript-jsx");
    assert_eq!(slugify("snake_case_name"), "snakecasename");
  }

  #[test]
  fn test_slugify_collapses_hyphens() {
    assert_eq!(slugify("a --- b"), "a-b");
    assert_eq!(slugify("--edge--"), "edge");
  }

  #[test]
  fn test_slugify_keeps_unicode_letters() {
    assert_eq!(slugify("Présentation générale"), "présentation-générale");
  }

  #[test]
  fn test_slugify_empty() {
    assert_eq!(slugify("?!"), "");
    assert_eq!(slugify("<br>"), "");
  }

  #[test]
  fn test_registry_suffixes_repeats() {
    let mut registry = SlugRegistry::new();
    assert_eq!(registry.next_slug("Setup", 1), "setup");
    assert_eq!(registry.next_slug("Setup", 2), "setup-2");
    assert_eq!(registry.next_slug("Setup", 3), "setup-3");
  }

  #[test]
  fn test_registry_avoids_literal_collisions() {
    let mut registry = SlugRegistry::new();
    assert_eq!(registry.next_slug("Setup", 1), "setup");
    assert_eq!(registry.next_slug("Setup", 2), "setup-2");
    assert_eq!(registry.next_slug("Setup 2", 3), "setup-2-2");
  }

  #[test]
  fn test_registry_empty_fallback() {
    let mut registry = SlugRegistry::new();
    assert_eq!(registry.next_slug("Intro", 1), "intro");
    assert_eq!(registry.next_slug("???", 2), "section-2");
  }
}
