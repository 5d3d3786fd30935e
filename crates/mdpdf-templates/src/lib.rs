//! Built-in `default` template of mdpdf.
//!
//! A template is a directory holding any of the files named below. Custom
//! templates fall back to the embedded stylesheet and document shell, but not
//! to the embedded header and footer.
use std::collections::HashMap;

/// Name of the template embedded in the binary.
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// File name of the page header inside a template directory.
pub const HEADER_FILE: &str = "header.html";
/// File name of the page footer inside a template directory.
pub const FOOTER_FILE: &str = "footer.html";
/// File name of the stylesheet inside a template directory.
pub const CSS_FILE: &str = "template.css";
/// File name of the logo inside a template directory.
pub const LOGO_FILE: &str = "logo.png";
/// File name of the HTML document shell inside a template directory.
pub const DOCUMENT_FILE: &str = "document.html";

pub const DEFAULT_CSS: &str = include_str!("../templates/default.css");
pub const DEFAULT_HEADER: &str = include_str!("../templates/header.html");
pub const DEFAULT_FOOTER: &str = include_str!("../templates/footer.html");
pub const DOCUMENT_SHELL: &str = include_str!("../templates/document.html");

/// Placeholder header or footer used when the section is disabled.
pub const EMPTY_SECTION: &str = "<div></div>";

/// Map every file of the built-in template to its content, keyed by the file
/// name it has inside a template directory.
#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert(HEADER_FILE, DEFAULT_HEADER);
  templates.insert(FOOTER_FILE, DEFAULT_FOOTER);
  templates.insert(CSS_FILE, DEFAULT_CSS);
  templates.insert(DOCUMENT_FILE, DOCUMENT_SHELL);
  templates
}
