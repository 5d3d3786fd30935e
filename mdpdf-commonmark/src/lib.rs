//! # mdpdf-commonmark - Markdown preprocessing for PDF documents
//!
//! Text transforms that prepare a Markdown document for rendering to a
//! self-contained PDF: local images are embedded as data URIs, a `[[toc]]`
//! marker becomes a linked table of contents and GitHub-style alerts become
//! styled HTML containers.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdpdf_commonmark::{PreprocessOptions, Preprocessor};
//!
//! let preprocessor = Preprocessor::new(PreprocessOptions::default());
//! let result = preprocessor.process("[[toc]]\n\n# Hello\n\n> [!TIP]\n> Read me.");
//!
//! assert!(result.markdown.contains("<nav class=\"toc\">"));
//! assert!(result.markdown.contains("markdown-alert-tip"));
//! assert_eq!(result.headings[0].slug, "hello");
//! ```
//!
//! ## Individual transforms
//!
//! Every stage is also available as a free function:
//!
//! ```rust
//! use mdpdf_commonmark::{render_alerts, render_toc, slugify};
//!
//! assert_eq!(slugify("Hello, World!"), "hello-world");
//! let md = render_toc("[[toc]]\n# A\n## B", 1, 3);
//! assert!(md.contains("<a href=\"#b\">B</a>"));
//! let md = render_alerts("> [!NOTE]\n> Plain.");
//! assert!(md.contains("<p>Plain.</p>"));
//! ```

pub mod frontmatter;
pub mod processor;
mod types;
pub mod utils;

pub use crate::{
  frontmatter::{FrontMatter, FrontMatterError, extract_front_matter},
  processor::{
    ComrakInline,
    FsLoader,
    InlineRenderer,
    PreprocessOptions,
    PreprocessOptionsBuilder,
    PreprocessResult,
    Preprocessor,
    ResourceLoader,
    embed_images,
    embed_images_with,
    render_alerts,
    render_alerts_with,
    render_toc,
    render_toc_with,
    scan_headings,
  },
  types::{AlertBlock, AlertKind, Heading, ImageReference},
  utils::{SlugRegistry, slugify},
};
