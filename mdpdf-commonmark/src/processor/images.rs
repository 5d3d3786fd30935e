//! Inline embedding of local images.
//!
//! Every `![alt](path)` or `![alt](path "title")` pointing at a local file is
//! rewritten to carry a base64 data URI, so the rendered document does not
//! depend on files next to it. Remote images, existing data URIs and missing
//! files are left untouched.

use std::{
  path::Path,
  sync::LazyLock,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::{debug, warn};
use regex::{Captures, Regex};

use super::types::{FsLoader, ResourceLoader};
use crate::{types::ImageReference, utils::never_matching_regex};

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"!\[(?P<alt>[^\]]*)\]\(\s*(?:<(?P<bracketed>[^>\n]+)>|(?P<path>[^)\s]+))(?:\s+(?:"[^"\n]*"|'[^'\n]*'))?\s*\)"#,
  )
  .unwrap_or_else(|e| {
    log::error!("Failed to compile IMAGE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Prefixes of image targets that are never embedded.
const SKIPPED_PREFIXES: [&str; 3] = ["http://", "https://", "data:"];

/// Determine the MIME type of an image from its file extension.
///
/// Unknown extensions map to `application/octet-stream`.
#[must_use]
pub fn mime_type_for(path: &Path) -> &'static str {
  let extension = path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(str::to_ascii_lowercase);

  match extension.as_deref() {
    Some("png") => "image/png",
    Some("jpg" | "jpeg") => "image/jpeg",
    Some("gif") => "image/gif",
    Some("svg") => "image/svg+xml",
    Some("webp") => "image/webp",
    Some("bmp") => "image/bmp",
    Some("ico") => "image/x-icon",
    _ => "application/octet-stream",
  }
}

/// Encode raw bytes as a base64 data URI.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
  format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether an image target must be left as-is.
fn is_external(path: &str) -> bool {
  SKIPPED_PREFIXES.iter().any(|prefix| {
    path
      .get(..prefix.len())
      .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
  })
}

/// Extract the local image references of a Markdown text, in order.
#[must_use]
pub fn find_local_images(markdown: &str) -> Vec<ImageReference> {
  IMAGE_RE
    .captures_iter(markdown)
    .filter_map(|caps| reference_from(&caps))
    .collect()
}

fn reference_from(caps: &Captures) -> Option<ImageReference> {
  let path = caps
    .name("bracketed")
    .or_else(|| caps.name("path"))?
    .as_str()
    .trim();
  if is_external(path) {
    return None;
  }
  Some(ImageReference {
    alt_text: caps["alt"].to_string(),
    path:     path.to_string(),
  })
}

/// Embed local images as data URIs, reading from the filesystem.
///
/// # Arguments
///
/// * `markdown` - The input Markdown text
/// * `base_dir` - Directory relative image paths are resolved against
///
/// # Returns
///
/// The Markdown with every resolvable local image inlined
#[must_use]
pub fn embed_images(markdown: &str, base_dir: &Path) -> String {
  embed_images_with(markdown, base_dir, &FsLoader)
}

/// Embed local images as data URIs, using an explicit resource loader.
///
/// The title of a rewritten image is dropped; the alt text is preserved.
/// Images that cannot be read are logged and left unchanged.
#[must_use]
pub fn embed_images_with(
  markdown: &str,
  base_dir: &Path,
  loader: &dyn ResourceLoader,
) -> String {
  IMAGE_RE
    .replace_all(markdown, |caps: &Captures| {
      let original = caps[0].to_string();
      let Some(reference) = reference_from(caps) else {
        return original;
      };

      let resolved = loader.resolve(base_dir, &reference.path);
      match loader.read(&resolved) {
        Ok(bytes) => {
          debug!(
            "Embedding image {} ({} bytes)",
            resolved.display(),
            bytes.len()
          );
          format!(
            "![{}]({})",
            reference.alt_text,
            data_uri(mime_type_for(&resolved), &bytes)
          )
        },
        Err(e) => {
          warn!("Image not found, leaving reference as-is: {} ({e})", resolved.display());
          original
        },
      }
    })
    .into_owned()
}
