//! Markdown preprocessing module.
//!
//! The preprocessor rewrites Markdown text before it is rendered: local
//! images become data URIs, a `[[toc]]` marker becomes a linked outline and
//! GitHub-style alerts become styled containers. Each transform is a plain
//! `&str -> String` function and can be used on its own.
//!
//! # Architecture
//!
//! - [`core`]: `Preprocessor` implementation and the ordered pipeline
//! - [`process`]: High-level processing functions with error recovery
//! - [`images`]: Local image embedding
//! - [`toc`]: Heading scanner and table of contents
//! - [`alerts`]: Alert block state machine
//! - [`types`]: Options, results and the collaborator traits
pub mod alerts;
pub mod core;
pub mod images;
pub mod process;
pub mod toc;
pub mod types;

pub use alerts::{render_alert, render_alerts, render_alerts_with};
pub use core::collect_markdown_files;
pub use images::{data_uri, embed_images, embed_images_with, find_local_images, mime_type_for};
pub use process::{process_markdown_file, process_safe, process_with_recovery};
pub use toc::{TOC_MARKER, render_outline, render_toc, render_toc_with, scan_headings};
pub use types::{
  ComrakInline,
  DEFAULT_TOC_DEPTH,
  DEFAULT_TOC_START,
  DEFAULT_TOC_TITLE,
  FsLoader,
  InlineRenderer,
  PreprocessOptions,
  PreprocessOptionsBuilder,
  PreprocessResult,
  Preprocessor,
  ResourceLoader,
  comrak_options,
};
