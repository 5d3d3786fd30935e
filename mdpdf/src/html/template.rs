//! Rendering of page headers, footers and the HTML document shell.
use std::collections::BTreeMap;

use log::warn;
use tera::Tera;

use crate::error::MdpdfError;

/// Values substituted into header and footer templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionVars {
  /// Logo as a data URI, or empty.
  pub logo:  String,
  /// Formatted date of the conversion.
  pub date:  String,
  /// Document title, HTML-escaped.
  pub title: String,
}

impl SectionVars {
  fn as_map(&self) -> BTreeMap<&'static str, &str> {
    BTreeMap::from([
      ("LOGO", self.logo.as_str()),
      ("DATE", self.date.as_str()),
      ("TITLE", self.title.as_str()),
    ])
  }
}

/// Render a header or footer template.
///
/// Templates use `{{LOGO}}`, `{{DATE}}` and `{{TITLE}}`. When the template is
/// not valid Tera (stray braces, unknown variables, inline scripts), each
/// known placeholder is substituted literally instead and anything else is
/// kept as-is.
#[must_use]
pub fn render_section(source: &str, vars: &SectionVars) -> String {
  match render_section_with_tera(source, vars) {
    Ok(html) => html,
    Err(e) => {
      warn!("Falling back to plain placeholder substitution: {e}");
      substitute_placeholders(source, vars)
    },
  }
}

fn render_section_with_tera(
  source: &str,
  vars: &SectionVars,
) -> Result<String, MdpdfError> {
  let mut tera = Tera::default();
  tera.add_raw_template("section", source)?;

  let mut context = tera::Context::new();
  for (key, value) in vars.as_map() {
    context.insert(key, value);
  }
  Ok(tera.render("section", &context)?)
}

/// Replace every `{{VAR}}` occurrence of the known placeholders.
#[must_use]
pub fn substitute_placeholders(source: &str, vars: &SectionVars) -> String {
  vars
    .as_map()
    .into_iter()
    .fold(source.to_string(), |acc, (key, value)| {
      acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}

/// Inputs of the HTML document shell.
#[derive(Debug, Clone)]
pub struct ShellContext<'a> {
  pub title:     &'a str,
  pub lang:      &'a str,
  pub css:       &'a str,
  pub body:      &'a str,
  /// Base URL relative resources resolve against, usually the document
  /// directory as a `file://` URL.
  pub base_href: Option<&'a str>,
}

/// Wrap a rendered body into the HTML document shell.
///
/// # Errors
///
/// Returns an error if the shell template is invalid.
pub fn render_document(
  shell: &str,
  context: &ShellContext<'_>,
) -> Result<String, MdpdfError> {
  let mut tera = Tera::default();
  // The `.html` name turns autoescaping on for the title.
  tera.add_raw_template("document.html", shell)?;

  let mut tera_context = tera::Context::new();
  tera_context.insert("title", context.title);
  tera_context.insert("lang", context.lang);
  tera_context.insert("css", context.css);
  tera_context.insert("body", context.body);
  tera_context.insert("base_href", &context.base_href);

  Ok(tera.render("document.html", &tera_context)?)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use mdpdf_templates::{DEFAULT_FOOTER, DEFAULT_HEADER, DOCUMENT_SHELL};

  use super::*;

  fn vars() -> SectionVars {
    SectionVars {
      logo:  "data:image/png;base64,AAAA".to_string(),
      date:  "16 octobre 2026".to_string(),
      title: "Rapport &amp; annexes".to_string(),
    }
  }

  #[test]
  fn test_default_sections_render() {
    let header = render_section(DEFAULT_HEADER, &vars());
    assert!(header.contains("src=\"data:image/png;base64,AAAA\""));
    assert!(header.contains("Rapport &amp; annexes"));

    let footer = render_section(DEFAULT_FOOTER, &vars());
    assert!(footer.contains("16 octobre 2026"));
    assert!(footer.contains("class=\"pageNumber\""));
  }

  #[test]
  fn test_unknown_placeholder_falls_back() {
    let source = "<div>{{DATE}} - {{PAGE}}</div>";
    assert_eq!(
      render_section(source, &vars()),
      "<div>16 octobre 2026 - {{PAGE}}</div>"
    );
  }

  #[test]
  fn test_invalid_tera_falls_back() {
    let source = "<script>if (x) {{ y }} {% nope</script><p>{{LOGO}}</p>";
    let html = render_section(source, &vars());
    assert!(html.contains("<p>data:image/png;base64,AAAA</p>"));
  }

  #[test]
  fn test_substitute_every_occurrence() {
    let html = substitute_placeholders("{{DATE}}|{{DATE}}|{{ DATE }}", &vars());
    assert_eq!(html, "16 octobre 2026|16 octobre 2026|{{ DATE }}");
  }

  #[test]
  fn test_render_document_shell() {
    let html = render_document(DOCUMENT_SHELL, &ShellContext {
      title:     "A <b> title",
      lang:      "fr",
      css:       "body { color: red; }",
      body:      "<h1>Hi</h1>",
      base_href: None,
    })
    .unwrap();
    assert!(html.contains("<html lang=\"fr\">"));
    assert!(html.contains("<title>A &lt;b&gt; title</title>"));
    assert!(html.contains("body { color: red; }"));
    assert!(html.contains("<h1>Hi</h1>"));
    assert!(!html.contains("<base"));
  }

  #[test]
  fn test_render_document_with_base() {
    let html = render_document(DOCUMENT_SHELL, &ShellContext {
      title:     "t",
      lang:      "en",
      css:       "",
      body:      "",
      base_href: Some("file:///docs/"),
    })
    .unwrap();
    assert!(html.contains("<base href=\""));
  }

  #[test]
  fn test_broken_shell_is_an_error() {
    let result = render_document("{% if %}", &ShellContext {
      title:     "t",
      lang:      "en",
      css:       "",
      body:      "",
      base_href: None,
    });
    assert!(matches!(result, Err(MdpdfError::Template(_))));
  }
}
