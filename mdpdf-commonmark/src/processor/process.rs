//! High-level processing functions with error recovery.
use std::{fs, io, path::Path};

use log::error;

use super::types::{PreprocessOptions, PreprocessResult, Preprocessor};

/// Preprocess Markdown content with error recovery.
///
/// A panic anywhere in the pipeline is logged and the content is returned
/// unchanged, so one malformed document never takes the batch down.
///
/// # Arguments
///
/// * `preprocessor` - The configured preprocessor
/// * `content` - The Markdown body to process
///
/// # Returns
///
/// A `PreprocessResult`; on failure it carries the input and no headings
#[must_use]
pub fn process_with_recovery(
  preprocessor: &Preprocessor,
  content: &str,
) -> PreprocessResult {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    preprocessor.process(content)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during markdown preprocessing: {panic_err:?}");
      PreprocessResult {
        markdown: content.to_string(),
        headings: Vec::new(),
      }
    },
  }
}

/// Safely apply a text transform with error recovery.
///
/// Ensures that the original text (or the given fallback) is returned rather
/// than a complete failure when the transform panics.
///
/// # Arguments
///
/// * `content` - The content to process
/// * `processor_fn` - The transform to apply
/// * `fallback` - Fallback content to use on failure; empty means the input
///
/// # Returns
///
/// The processed content or fallback on error
pub fn process_safe<F>(content: &str, processor_fn: F, fallback: &str) -> String
where
  F: FnOnce(&str) -> String,
{
  if content.is_empty() {
    return String::new();
  }

  let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor_fn(content)
  }));

  match result {
    Ok(processed_text) => processed_text,
    Err(e) => {
      if let Some(error_msg) = e.downcast_ref::<String>() {
        error!("Error processing markdown: {error_msg}");
      } else if let Some(error_msg) = e.downcast_ref::<&str>() {
        error!("Error processing markdown: {error_msg}");
      } else {
        error!("Unknown error occurred while processing markdown");
      }

      if fallback.is_empty() {
        content.to_string()
      } else {
        fallback.to_string()
      }
    },
  }
}

/// Preprocess a Markdown file, resolving images against its directory.
///
/// # Arguments
///
/// * `file_path` - Path to the Markdown file
/// * `options` - Options to use; `base_dir` is replaced by the file's parent
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn process_markdown_file(
  file_path: &Path,
  options: PreprocessOptions,
) -> io::Result<PreprocessResult> {
  let content = fs::read_to_string(file_path)?;
  let base_dir = file_path.parent().unwrap_or_else(|| Path::new("."));
  let preprocessor = Preprocessor::new(options).with_base_dir(base_dir);
  Ok(process_with_recovery(&preprocessor, &content))
}
