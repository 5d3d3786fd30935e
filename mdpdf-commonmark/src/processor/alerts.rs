//! GitHub-style alert blocks.
//!
//! ```markdown
//! > [!WARNING] Careful
//! > This is line one.
//! > This is line two.
//! ```
//!
//! Alerts are recognized by a small line state machine rather than a regex
//! over the whole text, so blank lines inside the body and alerts that run to
//! the end of input are explicit transitions.

use std::{fmt::Write as _, sync::LazyLock};

use log::trace;
use regex::Regex;

use super::types::{ComrakInline, InlineRenderer};
use crate::{
  types::{AlertBlock, AlertKind},
  utils::{codeblock::FenceTracker, never_matching_regex},
};

static ALERT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?i)^\s{0,3}>\s*\[!(note|tip|important|warning|caution|info|danger)\](.*)$",
  )
  .unwrap_or_else(|e| {
    log::error!("Failed to compile ALERT_HEADER_RE regex: {e}");
    never_matching_regex()
  })
});

#[derive(Debug)]
enum State {
  /// Not inside an alert.
  Outside,
  /// The opening `> [!KIND]` line was just consumed.
  InAlertHeader(AlertBlock),
  /// Consuming `>` continuation lines.
  InAlertBody {
    block:     AlertBlock,
    paragraph: Vec<String>,
  },
}

/// Parse an alert opening line into an empty block.
///
/// Unknown kinds are not matched, leaving the blockquote as-is.
fn parse_alert_header(line: &str) -> Option<AlertBlock> {
  let caps = ALERT_HEADER_RE.captures(line)?;
  let kind = AlertKind::from_marker(&caps[1])?;
  let title = caps[2].trim();
  Some(AlertBlock {
    kind,
    custom_title: (!title.is_empty()).then(|| title.to_string()),
    paragraphs: Vec::new(),
  })
}

/// Strip the blockquote prefix of a continuation line.
///
/// Returns `None` when the line is not blockquote-prefixed.
fn strip_quote_prefix(line: &str) -> Option<&str> {
  let rest = line.trim_start().strip_prefix('>')?;
  Some(rest.strip_prefix(' ').unwrap_or(rest))
}

fn flush_paragraph(block: &mut AlertBlock, paragraph: &mut Vec<String>) {
  if !paragraph.is_empty() {
    block.paragraphs.push(paragraph.join(" "));
    paragraph.clear();
  }
}

/// Render an alert block as an HTML container.
#[must_use]
pub fn render_alert(block: &AlertBlock, inline: &dyn InlineRenderer) -> String {
  let title = block.custom_title.as_deref().map_or_else(
    || block.kind.display_title().to_string(),
    |custom| inline.render_inline(custom),
  );

  let mut html = format!(
    "<div class=\"markdown-alert {}\">\n<p \
     class=\"markdown-alert-title\">{} {title}</p>\n",
    block.kind.css_class(),
    block.kind.icon()
  );
  for paragraph in &block.paragraphs {
    let _ = writeln!(html, "<p>{}</p>", inline.render_inline(paragraph));
  }
  html.push_str("</div>");
  html
}

/// Rewrite GitHub-style alert blocks into HTML containers.
///
/// Uses the comrak inline renderer.
#[must_use]
pub fn render_alerts(markdown: &str) -> String {
  render_alerts_with(markdown, &ComrakInline)
}

/// Rewrite GitHub-style alert blocks into HTML containers, using an explicit
/// inline renderer.
///
/// An alert starts at a `> [!KIND]` line outside fenced code and extends over
/// the following blockquote-prefixed lines. Blank body lines separate
/// paragraphs; lines of one paragraph are joined with a single space. The
/// first line without a `>` prefix ends the alert and is kept as-is.
#[must_use]
pub fn render_alerts_with(markdown: &str, inline: &dyn InlineRenderer) -> String {
  let mut output: Vec<String> = Vec::new();
  let mut fence = FenceTracker::new();
  let mut state = State::Outside;

  for line in markdown.split('\n') {
    state = match state {
      State::Outside => {
        if fence.advance(line) {
          output.push(line.to_string());
          State::Outside
        } else if let Some(block) = parse_alert_header(line) {
          trace!("Alert block opened: {:?}", block.kind);
          State::InAlertHeader(block)
        } else {
          output.push(line.to_string());
          State::Outside
        }
      },
      State::InAlertHeader(block) => {
        continue_alert(block, Vec::new(), line, inline, &mut output, &mut fence)
      },
      State::InAlertBody { block, paragraph } => {
        continue_alert(block, paragraph, line, inline, &mut output, &mut fence)
      },
    };
  }

  match state {
    State::Outside => {},
    State::InAlertHeader(block) => output.push(render_alert(&block, inline)),
    State::InAlertBody {
      mut block,
      mut paragraph,
    } => {
      flush_paragraph(&mut block, &mut paragraph);
      output.push(render_alert(&block, inline));
    },
  }

  output.join("\n")
}

/// Feed one line to an open alert and return the next state.
fn continue_alert(
  mut block: AlertBlock,
  mut paragraph: Vec<String>,
  line: &str,
  inline: &dyn InlineRenderer,
  output: &mut Vec<String>,
  fence: &mut FenceTracker,
) -> State {
  if let Some(content) = strip_quote_prefix(line) {
    if content.trim().is_empty() {
      flush_paragraph(&mut block, &mut paragraph);
    } else {
      paragraph.push(content.trim().to_string());
    }
    return State::InAlertBody { block, paragraph };
  }

  flush_paragraph(&mut block, &mut paragraph);
  output.push(render_alert(&block, inline));

  // The HTML block would otherwise swallow the Markdown that follows it.
  if !line.trim().is_empty() {
    output.push(String::new());
  }

  if fence.advance(line) {
    output.push(line.to_string());
    State::Outside
  } else if let Some(next) = parse_alert_header(line) {
    State::InAlertHeader(next)
  } else {
    output.push(line.to_string());
    State::Outside
  }
}
