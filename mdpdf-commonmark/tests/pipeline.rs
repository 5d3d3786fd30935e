#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use std::fs;

use mdpdf_commonmark::{
  PreprocessOptions,
  Preprocessor,
  embed_images,
  extract_front_matter,
  render_alerts,
  render_toc,
  scan_headings,
};

/// Check if the output contains all expected substrings.
fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull \
       HTML:\n{html}"
    );
  }
}

fn render(md: &str) -> String {
  Preprocessor::new(PreprocessOptions::default()).render_html(md)
}

#[test]
fn toc_is_identity_without_marker() {
  let inputs = [
    "",
    "# Title\n\nBody\n",
    "## A\n## A\n```\n# code\n```\n",
    "text with [toc] and [[ toc ]] lookalikes",
  ];
  for md in inputs {
    assert_eq!(render_toc(md, 1, 3), md);
  }
}

#[test]
fn toc_without_qualifying_headings_only_drops_marker() {
  let md = "Intro\n\n[[toc]]\n\n#### Too deep\n";
  assert_eq!(render_toc(md, 1, 3), "Intro\n\n\n\n#### Too deep\n");
}

#[test]
fn toc_inverted_range_collects_nothing() {
  let md = "[[toc]]\n# A\n## B\n### C";
  assert!(scan_headings(md, 4, 2).is_empty());
  let out = render_toc(md, 4, 2);
  assert!(!out.contains("[[toc]]"));
  assert!(!out.contains("<nav"));
}

#[test]
fn duplicate_titles_get_suffixed_slugs() {
  let md = "[[toc]]\n\n## Setup\n\n## Setup\n\n## Setup\n";
  let slugs: Vec<_> = scan_headings(md, 1, 3)
    .into_iter()
    .map(|h| h.slug)
    .collect();
  assert_eq!(slugs, ["setup", "setup-2", "setup-3"]);

  let html = render(md);
  assert_html_contains(&html, &[
    "<a href=\"#setup\">Setup</a>",
    "<a href=\"#setup-2\">Setup</a>",
    "<a href=\"#setup-3\">Setup</a>",
    "<a id=\"setup\"></a>",
    "<a id=\"setup-2\"></a>",
    "<a id=\"setup-3\"></a>",
  ]);
}

#[test]
fn every_outline_link_has_a_matching_anchor() {
  let md = "[[toc]]\n\n# Guide\n\n## Install *fast*\n\n### On `Linux`\n\n## \
            Install fast\n\n## !!!\n\n# Guide\n";
  let result = Preprocessor::new(PreprocessOptions::default()).process(md);
  assert_eq!(result.headings.len(), 6);
  for heading in &result.headings {
    assert!(
      result.markdown.contains(&format!("href=\"#{}\"", heading.slug)),
      "missing link for {}",
      heading.slug
    );
    assert!(
      result.markdown.contains(&format!("<a id=\"{}\"></a>", heading.slug)),
      "missing anchor for {}",
      heading.slug
    );
  }
  // Punctuation-only title falls back to its position.
  assert_eq!(result.headings[4].slug, "section-5");
}

#[test]
fn fenced_code_is_immune() {
  let md = "[[toc]]\n\n# Real\n\n```markdown\n# Not a heading\n> [!NOTE]\n> \
            still code\n```\n";
  let headings = scan_headings(md, 1, 6);
  assert_eq!(headings.len(), 1);
  assert_eq!(headings[0].title, "Real");

  let alerts = render_alerts(md);
  assert!(alerts.contains("> [!NOTE]\n> still code"));
  assert!(!alerts.contains("markdown-alert"));
}

#[test]
fn alert_round_trip() {
  let md = "> [!WARNING] Careful\n> This is line one.\n> This is line two.";
  let out = render_alerts(md);
  assert_html_contains(&out, &[
    "class=\"markdown-alert markdown-alert-warning\"",
    "⚠️ Careful</p>",
    "<p>This is line one. This is line two.</p>",
  ]);
  assert_eq!(out.matches("<p>").count(), 1);
}

#[test]
fn alert_aliases_share_classes() {
  assert_eq!(
    render_alerts("> [!INFO]\n> text"),
    render_alerts("> [!NOTE]\n> text")
  );
  assert_eq!(
    render_alerts("> [!danger]\n> text"),
    render_alerts("> [!CAUTION]\n> text")
  );
}

#[test]
fn alert_followed_by_markdown_stays_markdown() {
  let html = render("> [!TIP]\n> Short.\n**Bold** after.\n");
  assert_html_contains(&html, &[
    "markdown-alert-tip",
    "<p>Short.</p>",
    "<strong>Bold</strong> after.",
  ]);
}

#[test]
fn unknown_alert_kind_is_a_blockquote() {
  let html = render("> [!FOO]\n> text\n");
  assert_html_contains(&html, &["<blockquote>", "[!FOO]"]);
  assert!(!html.contains("markdown-alert"));
}

#[test]
fn image_embedding_is_idempotent_and_skips_missing() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();

  let md = "![Logo](logo.svg \"Company\")\n![x](missing.png)\n![r](https://example.com/r.png)";
  let once = embed_images(md, dir.path());
  assert_html_contains(&once, &[
    "![Logo](data:image/svg+xml;base64,PHN2Zy8+)",
    "![x](missing.png)",
    "![r](https://example.com/r.png)",
  ]);
  assert!(!once.contains("Company"));
  assert_eq!(embed_images(&once, dir.path()), once);
}

#[test]
fn full_document_renders() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("pic.png"), [0x89, b'P', b'N', b'G']).unwrap();

  let source = "---\ntitle: Rapport annuel\n---\n[[toc]]\n\n# Résumé\n\n> \
                [!IMPORTANT]\n> Read *carefully*.\n\n![pic](pic.png)\n\n## \
                Détails\n";
  let front = extract_front_matter(source).unwrap();
  assert_eq!(front.value["title"], "Rapport annuel");

  let options = PreprocessOptions::builder()
    .base_dir(dir.path())
    .toc_title("Sommaire")
    .build();
  let html = Preprocessor::new(options).render_html(front.body(source));

  assert_html_contains(&html, &[
    "<p class=\"toc-title\">Sommaire</p>",
    "<a href=\"#résumé\">Résumé</a>",
    "<a href=\"#détails\">Détails</a>",
    "<h1>Résumé</h1>",
    "markdown-alert-important",
    "<em>carefully</em>",
    "src=\"data:image/png;base64,",
  ]);
  assert!(!html.contains("title: Rapport"));
}
