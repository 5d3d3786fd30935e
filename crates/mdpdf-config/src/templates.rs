use std::fmt;

/// Error type for configuration template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// Indicates that the requested configuration format is not supported.
  /// Contains the name of the unsupported format.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, commented so that every field
/// explains itself.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# mdpdf configuration file

# Template to use. Looked up in ~/.mdpdf/templates/<name>/, then in each of
# `template_dirs`, then in ./templates/<name>/. "default" is built in.
template = "default"

# Additional directories searched for templates
# template_dirs = ["~/work/templates"]

# Whether to print the page header and footer
header = true
footer = true

# Stylesheet and logo overriding the ones of the template
# css = "assets/custom.css"
# logo = "assets/logo.png"

# Directory receiving the generated files (defaults to the document directory)
# output_dir = "pdf"

# Heading levels collected by the [[toc]] marker
toc_start = 1
toc_depth = 3

# Label of the table of contents
toc_title = "Table of contents"

# Embed local images as data URIs
embed_images = true

# Locale of the {{DATE}} placeholder: "fr" or "en"
date_locale = "fr"

# Page format: "A4" or "Letter"
page_format = "A4"
"#;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "template": "default",
  "template_dirs": [],
  "header": true,
  "footer": true,
  "toc_start": 1,
  "toc_depth": 3,
  "toc_title": "Table of contents",
  "embed_images": true,
  "date_locale": "fr",
  "page_format": "A4"
}
"#;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
