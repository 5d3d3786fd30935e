//! Table of contents generation.
//!
//! A `[[toc]]` marker is replaced with a nested outline of the document's
//! headings, and an empty anchor is injected before every heading the outline
//! links to. Headings are scanned once; the same list drives both the outline
//! links and the anchor injection so the two can never disagree.

use std::{fmt::Write as _, sync::LazyLock};

use log::debug;
use regex::Regex;

use super::types::{ComrakInline, InlineRenderer};
use crate::{
  types::Heading,
  utils::{SlugRegistry, codeblock::FenceTracker, never_matching_regex},
};

/// Literal marker replaced by the table of contents.
pub const TOC_MARKER: &str = "[[toc]]";

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(#{1,6}) +(\S.*?)\s*$").unwrap_or_else(|e| {
    log::error!("Failed to compile HEADING_RE regex: {e}");
    never_matching_regex()
  })
});

/// Scan Markdown for headings with a level in `[min_level, max_level]`.
///
/// Lines inside fenced code blocks are never considered. Slugs are issued in
/// document order from a fresh [`SlugRegistry`], counting only the headings
/// that pass the level filter. An inverted range yields no headings.
///
/// # Arguments
///
/// * `markdown` - The Markdown text to scan
/// * `min_level` - Lowest heading level to keep (1-6)
/// * `max_level` - Highest heading level to keep (1-6)
///
/// # Returns
///
/// The retained headings, in document order
#[must_use]
pub fn scan_headings(markdown: &str, min_level: u8, max_level: u8) -> Vec<Heading> {
  let mut headings = Vec::new();
  if min_level > max_level {
    return headings;
  }

  let mut registry = SlugRegistry::new();
  let mut fence = FenceTracker::new();

  for (index, line) in markdown.split('\n').enumerate() {
    if fence.advance(line) || line.trim() == TOC_MARKER {
      continue;
    }

    let Some(caps) = HEADING_RE.captures(line) else {
      continue;
    };

    #[allow(
      clippy::cast_possible_truncation,
      reason = "The regex caps the marker at six characters"
    )]
    let level = caps[1].len() as u8;
    if level < min_level || level > max_level {
      continue;
    }

    let title = caps[2].to_string();
    let slug = registry.next_slug(&title, headings.len() + 1);
    headings.push(Heading {
      level,
      title,
      slug,
      line: index,
    });
  }

  headings
}

/// Render the nested outline for a list of headings.
///
/// Each increase of one level opens a nested list inside the current item;
/// each decrease closes one item and one list. Skipped levels get an
/// intermediate item so closing stays symmetric.
#[must_use]
pub fn render_outline(headings: &[Heading], inline: &dyn InlineRenderer) -> String {
  let Some(min_level) = headings.iter().map(|h| h.level).min() else {
    return String::new();
  };

  let mut html = String::new();
  let mut current = min_level - 1;

  for heading in headings {
    if heading.level > current {
      for depth in current..heading.level {
        html.push_str("<ul>\n");
        if depth + 1 < heading.level {
          html.push_str("<li>");
        }
      }
    } else {
      html.push_str("</li>\n");
      for _ in heading.level..current {
        html.push_str("</ul>\n</li>\n");
      }
    }

    let title = inline.render_inline(&heading.title);
    let _ = write!(html, "<li><a href=\"#{}\">{title}</a>", heading.slug);
    current = heading.level;
  }

  html.push_str("</li>\n");
  for _ in min_level..current {
    html.push_str("</ul>\n</li>\n");
  }
  html.push_str("</ul>\n");
  html
}

/// Wrap an outline into the labelled navigation container.
fn render_container(outline: &str, title: &str) -> String {
  format!(
    "<nav class=\"toc\">\n<p class=\"toc-title\">{}</p>\n{outline}</nav>\n",
    html_escape::encode_text(title)
  )
}

/// Replace `[[toc]]` markers with a table of contents.
///
/// Uses the comrak inline renderer and the default container label.
///
/// # Arguments
///
/// * `markdown` - The input Markdown text
/// * `toc_start` - First heading level included (usually 1)
/// * `toc_depth` - Last heading level included (usually 3)
///
/// # Returns
///
/// The Markdown with the outline substituted and heading anchors injected
#[must_use]
pub fn render_toc(markdown: &str, toc_start: u8, toc_depth: u8) -> String {
  render_toc_with(
    markdown,
    toc_start,
    toc_depth,
    super::types::DEFAULT_TOC_TITLE,
    &ComrakInline,
  )
  .0
}

/// Replace `[[toc]]` markers with a table of contents, using explicit
/// collaborators.
///
/// Returns the transformed text along with the headings that were linked.
/// Without a marker the text is returned unchanged. When the marker is
/// present but no heading qualifies, the markers are removed and nothing else
/// changes.
#[must_use]
pub fn render_toc_with(
  markdown: &str,
  toc_start: u8,
  toc_depth: u8,
  toc_title: &str,
  inline: &dyn InlineRenderer,
) -> (String, Vec<Heading>) {
  if !markdown.contains(TOC_MARKER) {
    return (markdown.to_string(), Vec::new());
  }

  let headings = scan_headings(markdown, toc_start, toc_depth);
  if headings.is_empty() {
    debug!("No headings in range {toc_start}..={toc_depth}, dropping marker");
    return (markdown.replace(TOC_MARKER, ""), headings);
  }

  debug!("Building table of contents from {} headings", headings.len());
  let container = render_container(&render_outline(&headings, inline), toc_title);

  let mut output = String::with_capacity(markdown.len() + container.len());
  let mut pending = headings.iter().peekable();
  for (index, line) in markdown.split('\n').enumerate() {
    if index > 0 {
      output.push('\n');
    }

    if let Some(heading) = pending.next_if(|h| h.line == index) {
      let _ = writeln!(output, "<a id=\"{}\"></a>", heading.slug);
    }

    output.push_str(&line.replace(TOC_MARKER, &container));
  }

  (output, headings)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Renders titles verbatim so outline structure is easy to assert on.
  struct PlainInline;

  impl InlineRenderer for PlainInline {
    fn render_inline(&self, fragment: &str) -> String {
      fragment.to_string()
    }
  }

  fn slugs(headings: &[Heading]) -> Vec<&str> {
    headings.iter().map(|h| h.slug.as_str()).collect()
  }

  #[test]
  fn test_scan_levels_and_lines() {
    let md = "# One\ntext\n## Two\n#### Four\n";
    let headings = scan_headings(md, 1, 3);
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[0].line, 0);
    assert_eq!(headings[1].title, "Two");
    assert_eq!(headings[1].line, 2);
  }

  #[test]
  fn test_scan_duplicate_titles() {
    let md = "## Setup\n## Setup\n## Setup";
    assert_eq!(slugs(&scan_headings(md, 1, 3)), vec![
      "setup", "setup-2", "setup-3"
    ]);
  }

  #[test]
  fn test_scan_counts_only_filtered_headings() {
    // The h4 "Setup" is out of range and must not consume a suffix.
    let md = "#### Setup\n## Setup\n## Setup";
    assert_eq!(slugs(&scan_headings(md, 1, 3)), vec!["setup", "setup-2"]);
  }

  #[test]
  fn test_scan_skips_code_fences() {
    let md = "# Real\n```\n# Not a heading\n```\n# Also real";
    let headings = scan_headings(md, 1, 6);
    assert_eq!(slugs(&headings), vec!["real", "also-real"]);
  }

  #[test]
  fn test_scan_inverted_range() {
    assert!(scan_headings("# A\n## B\n### C\n#### D", 4, 2).is_empty());
  }

  #[test]
  fn test_scan_requires_space_after_hashes() {
    let md = "#hashtag\n####### seven\n# ok";
    assert_eq!(slugs(&scan_headings(md, 1, 6)), vec!["ok"]);
  }

  #[test]
  fn test_outline_nesting() {
    let headings = scan_headings("# A\n## B\n## C\n# D", 1, 3);
    let html = render_outline(&headings, &PlainInline);
    assert_eq!(
      html,
      "<ul>\n<li><a href=\"#a\">A</a><ul>\n<li><a \
       href=\"#b\">B</a></li>\n<li><a href=\"#c\">C</a></li>\n</ul>\n</li>\n<li><a \
       href=\"#d\">D</a></li>\n</ul>\n"
    );
  }

  #[test]
  fn test_outline_skipped_level_is_balanced() {
    let headings = scan_headings("# A\n### Deep\n# B", 1, 3);
    let html = render_outline(&headings, &PlainInline);
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
  }

  #[test]
  fn test_outline_starting_deeper_than_minimum() {
    let headings = scan_headings("### Deep\n# Top", 1, 3);
    let html = render_outline(&headings, &PlainInline);
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
    assert!(html.ends_with("<li><a href=\"#top\">Top</a></li>\n</ul>\n"));
  }

  #[test]
  fn test_toc_identity_without_marker() {
    let md = "# Title\n\nNo marker here.\n";
    assert_eq!(render_toc(md, 1, 3), md);
  }

  #[test]
  fn test_toc_marker_removed_without_headings() {
    let md = "[[toc]]\n\nJust text.\n";
    assert_eq!(render_toc(md, 1, 3), "\n\nJust text.\n");
  }

  #[test]
  fn test_toc_inverted_range_removes_marker() {
    let md = "[[toc]]\n# A\n## B";
    let out = render_toc(md, 4, 2);
    assert_eq!(out, "\n# A\n## B");
    assert!(!out.contains("<nav"));
  }

  #[test]
  fn test_toc_injects_anchors_and_links() {
    let md = "[[toc]]\n\n# Intro\n\n## Setup\n\n## Setup\n";
    let (out, headings) = render_toc_with(md, 1, 3, "Sommaire", &PlainInline);
    assert_eq!(headings.len(), 3);
    assert!(out.contains("<p class=\"toc-title\">Sommaire</p>"));
    assert!(out.contains("<a href=\"#setup-2\">Setup</a>"));
    assert!(out.contains("<a id=\"intro\"></a>\n# Intro"));
    assert!(out.contains("<a id=\"setup\"></a>\n## Setup"));
    assert!(out.contains("<a id=\"setup-2\"></a>\n## Setup"));
    assert!(!out.contains(TOC_MARKER));
  }

  #[test]
  fn test_toc_out_of_range_headings_stay_plain() {
    let md = "[[toc]]\n# Top\n#### Detail";
    let out = render_toc(md, 1, 3);
    assert!(out.contains("<a id=\"top\"></a>\n# Top"));
    assert!(out.contains("\n#### Detail"));
    assert!(!out.contains("<a id=\"detail\">"));
  }

  #[test]
  fn test_toc_every_marker_receives_outline() {
    let md = "[[toc]]\n# A\n[[toc]]";
    let out = render_toc(md, 1, 3);
    assert_eq!(out.matches("<nav class=\"toc\">").count(), 2);
  }

  #[test]
  fn test_toc_ignores_fenced_headings() {
    let md = "[[toc]]\n```\n# Hidden\n```\n# Shown";
    let (out, headings) = render_toc_with(md, 1, 3, "Contents", &PlainInline);
    assert_eq!(slugs(&headings), vec!["shown"]);
    assert!(out.contains("```\n# Hidden\n```"));
  }

  #[test]
  fn test_toc_renders_inline_markup_in_links() {
    let md = "[[toc]]\n# The `main` *function*";
    let out = render_toc(md, 1, 3);
    assert!(out.contains(
      "<a href=\"#the-main-function\">The <code>main</code> \
       <em>function</em></a>"
    ));
  }
}
